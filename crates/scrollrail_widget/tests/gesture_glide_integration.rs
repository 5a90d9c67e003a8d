//! Integration tests for the full gesture → frame → offset pipeline
//!
//! These tests verify that:
//! - Heterogeneous input (wheel, thumb drag, rail press, touch pan) funnels
//!   into one clamped authoritative offset
//! - Bursts of same-tick requests collapse into a single surface write
//! - The post-release glide coasts on the exponential decay and terminates
//!   on the visible-motion floor or boundary saturation, and nothing else
//! - Lifecycle rules hold: idempotent acquisition, one-shot native sync,
//!   full teardown on destroy

use std::sync::{Arc, Mutex};

use scrollrail_core::{GestureMode, ScrollConfig};
use scrollrail_widget::{
    GesturePhase, HeadlessSurface, InputEvent, ManualFrames, ScrollId, ScrollRegistry,
    SurfaceCapabilities, SurfaceState,
};

fn instrument(
    content: f32,
    visible: f32,
    track: f32,
) -> (ScrollRegistry, ScrollId, Arc<Mutex<SurfaceState>>) {
    let surface = HeadlessSurface::new(content, visible, track);
    let state = surface.state();
    let mut registry = ScrollRegistry::new();
    let id = registry.acquire(
        Box::new(surface),
        Box::new(ManualFrames::new()),
        ScrollConfig::default(),
    );
    (registry, id, state)
}

/// Drive a 10-sample touch pan (20 px per sample, 13 ms apart) and release.
/// The accumulators work out to a release velocity of exactly 50 px/ms.
fn pan_and_release(registry: &mut ScrollRegistry, id: ScrollId, start_ms: f64) -> f64 {
    let controller = registry.get_mut(id).unwrap();
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Start,
            touch_y: 700.0,
        },
        start_ms,
    );
    let mut y = 700.0;
    let mut t = start_ms;
    for _ in 0..10 {
        t += 13.0;
        y -= 20.0;
        controller.handle_input(
            InputEvent::TouchPan {
                phase: GesturePhase::Move,
                touch_y: y,
            },
            t,
        );
        controller.on_frame(t + 1.0);
    }
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::End,
            touch_y: y,
        },
        t,
    );
    t
}

#[test]
fn wheel_deltas_quantize_to_the_configured_step() {
    let (mut registry, id, _) = instrument(2000.0, 500.0, 500.0);
    let controller = registry.get_mut(id).unwrap();

    let mut t = 0.0;
    for raw in [3.0, 120.0, 480.0] {
        controller.handle_input(InputEvent::Wheel { raw_delta: raw }, t);
        t += 16.0;
        controller.on_frame(t);
    }
    // three steps of exactly 120, regardless of raw magnitude
    assert_eq!(controller.offset(), 360.0);

    controller.handle_input(InputEvent::Wheel { raw_delta: -3.0 }, t);
    controller.on_frame(t + 16.0);
    assert_eq!(controller.offset(), 240.0);
}

#[test]
fn same_tick_scroll_to_burst_applies_once() {
    let (mut registry, id, state) = instrument(2000.0, 500.0, 500.0);
    state.lock().unwrap().clear_writes();

    let controller = registry.get_mut(id).unwrap();
    controller.scroll_to(100.0);
    controller.scroll_to(200.0);
    controller.scroll_to(300.0);
    controller.on_frame(16.0);

    // the last request wins and produces exactly one content write
    assert_eq!(controller.offset(), 300.0);
    assert_eq!(state.lock().unwrap().content_write_count(), 1);
    assert_eq!(state.lock().unwrap().content_offset(), Some(300.0));
}

#[test]
fn thumb_drag_inverse_maps_pointer_to_offset() {
    // travel = 500 - 125 = 375, max offset 1500
    let (mut registry, id, state) = instrument(2000.0, 500.0, 500.0);
    let controller = registry.get_mut(id).unwrap();

    // grab the thumb 5px below its top (thumb sits at 0)
    controller.handle_input(
        InputEvent::ThumbDrag {
            phase: GesturePhase::Start,
            pointer_y: 5.0,
        },
        0.0,
    );
    controller.handle_input(
        InputEvent::ThumbDrag {
            phase: GesturePhase::Move,
            pointer_y: 192.5,
        },
        8.0,
    );
    controller.on_frame(16.0);

    // thumb top 187.5 of 375 travel -> half of max offset
    assert_eq!(controller.offset(), 750.0);
    assert_eq!(state.lock().unwrap().thumb().unwrap().0, 187.5);

    // dragging past the end of the rail saturates
    controller.handle_input(
        InputEvent::ThumbDrag {
            phase: GesturePhase::Move,
            pointer_y: 5000.0,
        },
        24.0,
    );
    controller.on_frame(32.0);
    assert_eq!(controller.offset(), 1500.0);

    controller.handle_input(
        InputEvent::ThumbDrag {
            phase: GesturePhase::End,
            pointer_y: 5000.0,
        },
        40.0,
    );
    assert_eq!(controller.gesture_mode(), GestureMode::Idle);
}

#[test]
fn rail_press_is_a_one_shot_proportional_jump() {
    let (mut registry, id, _) = instrument(2000.0, 500.0, 500.0);
    let controller = registry.get_mut(id).unwrap();

    controller.handle_input(InputEvent::RailPress { pointer_y: 250.0 }, 0.0);
    assert_eq!(controller.gesture_mode(), GestureMode::DraggingRail);
    controller.on_frame(16.0);

    assert_eq!(controller.offset(), 750.0);
    assert_eq!(controller.gesture_mode(), GestureMode::Idle);
}

#[test]
fn touch_moves_within_one_tick_all_count() {
    let (mut registry, id, state) = instrument(2000.0, 500.0, 500.0);
    state.lock().unwrap().clear_writes();
    let controller = registry.get_mut(id).unwrap();

    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Start,
            touch_y: 600.0,
        },
        0.0,
    );
    // two moves land before the next refresh tick
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Move,
            touch_y: 580.0,
        },
        5.0,
    );
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Move,
            touch_y: 560.0,
        },
        10.0,
    );
    controller.on_frame(16.0);

    // both 20px deltas applied, in a single write
    assert_eq!(controller.offset(), 40.0);
    assert_eq!(state.lock().unwrap().content_write_count(), 1);
}

#[test]
fn glide_coasts_to_the_interior_stop() {
    let (mut registry, id, _) = instrument(20_000.0, 500.0, 500.0);
    let released_at = pan_and_release(&mut registry, id, 0.0);

    let controller = registry.get_mut(id).unwrap();
    assert!(controller.is_gliding());
    let release_offset = controller.offset();

    let mut t = released_at;
    while controller.needs_frame() {
        t += 16.0;
        controller.on_frame(t);
    }

    assert!(!controller.is_gliding());
    // visible motion ends once 50 * exp(-elapsed/325) <= 0.5,
    // at elapsed ≈ 325 * ln(100) ≈ 1497 ms
    let elapsed = t - released_at;
    assert!(
        (1497.0..1530.0).contains(&elapsed),
        "glide ran for {elapsed} ms"
    );
    // total coast distance for 16ms ticks of the decay sums to ≈ 981 px
    let coasted = controller.offset() - release_offset;
    assert!(
        (900.0..1050.0).contains(&coasted),
        "coasted {coasted} px"
    );
}

#[test]
fn glide_stops_early_when_the_offset_saturates() {
    // max offset is only 260px; the release leaves 200 already applied
    let (mut registry, id, _) = instrument(760.0, 500.0, 500.0);
    let released_at = pan_and_release(&mut registry, id, 0.0);

    let controller = registry.get_mut(id).unwrap();
    assert!(controller.is_gliding());

    let mut t = released_at;
    while controller.needs_frame() {
        t += 16.0;
        controller.on_frame(t);
    }

    assert!(!controller.is_gliding());
    assert_eq!(controller.offset(), controller.metrics().max_offset());
    // the boundary cut the coast short, long before the decay floor
    assert!(t - released_at < 100.0);
}

#[test]
fn slow_release_does_not_launch_a_glide() {
    let (mut registry, id, _) = instrument(20_000.0, 500.0, 500.0);
    let controller = registry.get_mut(id).unwrap();

    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Start,
            touch_y: 700.0,
        },
        0.0,
    );
    // one lazy 4px sample over 200ms: velocity 325 * 4 / 200 = 6.5 px/ms
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Move,
            touch_y: 696.0,
        },
        200.0,
    );
    controller.on_frame(201.0);
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::End,
            touch_y: 696.0,
        },
        200.0,
    );

    assert!(!controller.is_gliding());
    assert!(!controller.needs_frame());
}

#[test]
fn a_new_gesture_silences_the_old_glide() {
    let (mut registry, id, _) = instrument(20_000.0, 500.0, 500.0);
    let released_at = pan_and_release(&mut registry, id, 0.0);

    let controller = registry.get_mut(id).unwrap();
    // let the glide run a few ticks
    let mut t = released_at;
    for _ in 0..5 {
        t += 16.0;
        controller.on_frame(t);
    }
    assert!(controller.is_gliding());

    // finger lands again: the old animation must produce nothing further
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Start,
            touch_y: 400.0,
        },
        t,
    );
    assert!(!controller.is_gliding());
    assert!(!controller.needs_frame());

    let frozen = controller.offset();
    controller.on_frame(t + 16.0);
    assert_eq!(controller.offset(), frozen);

    // the new gesture's first sample is what moves the offset next
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Move,
            touch_y: 390.0,
        },
        t + 20.0,
    );
    controller.on_frame(t + 32.0);
    assert_eq!(controller.offset(), frozen + 10.0);
}

#[test]
fn acquiring_an_instrumented_surface_returns_the_same_instance() {
    let surface = HeadlessSurface::new(2000.0, 500.0, 500.0);
    let state = surface.state();
    let mut registry = ScrollRegistry::new();

    let first = registry.acquire(
        Box::new(surface),
        Box::new(ManualFrames::new()),
        ScrollConfig::default(),
    );
    // a second wrapper over the same tagged element
    let second = registry.acquire(
        Box::new(HeadlessSurface::from_state(state)),
        Box::new(ManualFrames::new()),
        ScrollConfig::default(),
    );

    assert_eq!(first, second);
    assert_eq!(registry.len(), 1);
}

#[test]
fn native_backend_adopts_the_scroll_position_once() {
    let surface = HeadlessSurface::new(2000.0, 500.0, 500.0).with_capabilities(
        SurfaceCapabilities {
            pointer_events: true,
            touch: true,
            css_transforms: false,
        },
    );
    let state = surface.state();
    let mut registry = ScrollRegistry::new();
    let id = registry.acquire(
        Box::new(surface),
        Box::new(ManualFrames::new()),
        ScrollConfig::default(),
    );
    assert!(state.lock().unwrap().listeners.native_scroll);

    // the host (or the user, via keyboard) scrolled natively to 400
    state.lock().unwrap().native_offset = 400.0;
    let controller = registry.get_mut(id).unwrap();
    controller.handle_input(InputEvent::ScrollSync, 0.0);
    // the listener is gone before the synthetic write can echo back
    assert!(!state.lock().unwrap().listeners.native_scroll);
    controller.on_frame(16.0);
    assert_eq!(controller.offset(), 400.0);
    // thumb caught up: 400/1500 of 375px travel
    let thumb = state.lock().unwrap().thumb().unwrap().0;
    assert!((thumb - 100.0).abs() < 1e-3);

    // later notifications are the synthetic path's own echoes; ignored
    state.lock().unwrap().native_offset = 800.0;
    controller.handle_input(InputEvent::ScrollSync, 32.0);
    controller.on_frame(48.0);
    assert_eq!(controller.offset(), 400.0);
}

#[test]
fn destroy_cancels_pending_work_and_restores_the_surface() {
    let surface = HeadlessSurface::new(2000.0, 500.0, 500.0);
    let state = surface.state();
    let frames = ManualFrames::new();
    let frame_log = frames.log();
    let mut registry = ScrollRegistry::new();
    let id = registry.acquire(Box::new(surface), Box::new(frames), ScrollConfig::default());

    // leave a request in flight
    registry.get_mut(id).unwrap().scroll_to(500.0);
    registry.destroy(id).unwrap();

    assert!(registry.is_empty());
    assert_eq!(frame_log.lock().unwrap().cancelled, 1);
    let state = state.lock().unwrap();
    assert!(!state.rail_installed);
    assert_eq!(state.tag, None);
    assert_eq!(state.listeners, Default::default());
}
