//! Headless pan demo
//!
//! Run with:
//! `cargo run -p scrollrail_widget --example headless_pan`
//!
//! Drives a headless surface through a scripted touch pan, releases it fast
//! enough to launch the inertial glide, and prints the applied offsets while
//! the content coasts to rest.

use scrollrail_core::ScrollConfig;
use scrollrail_widget::{GesturePhase, HeadlessSurface, InputEvent, ManualFrames, ScrollRegistry};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let surface = HeadlessSurface::new(24_000.0, 600.0, 600.0);
    let state = surface.state();
    let mut registry = ScrollRegistry::new();
    let id = registry.acquire(
        Box::new(surface),
        Box::new(ManualFrames::new()),
        ScrollConfig::default(),
    );

    let controller = registry.get_mut(id).unwrap();
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::Start,
            touch_y: 800.0,
        },
        0.0,
    );

    // a quick upward swipe: 25px per sample, 10ms apart
    let mut now = 0.0;
    let mut touch_y = 800.0;
    for _ in 0..12 {
        now += 10.0;
        touch_y -= 25.0;
        controller.handle_input(
            InputEvent::TouchPan {
                phase: GesturePhase::Move,
                touch_y,
            },
            now,
        );
        controller.on_frame(now + 1.0);
    }
    controller.handle_input(
        InputEvent::TouchPan {
            phase: GesturePhase::End,
            touch_y,
        },
        now,
    );
    println!("released at offset {:.1}", controller.offset());

    // crank refresh ticks until the glide settles
    let mut frames = 0u32;
    while controller.needs_frame() {
        now += 16.0;
        controller.on_frame(now);
        frames += 1;
        if frames % 10 == 0 {
            println!("t={now:>6.0}ms offset {:.1}", controller.offset());
        }
    }
    println!(
        "came to rest at offset {:.1} after {frames} glide frames",
        controller.offset()
    );
    println!(
        "thumb finished at {:?}",
        state.lock().unwrap().thumb().unwrap()
    );

    registry.destroy(id).unwrap();
}
