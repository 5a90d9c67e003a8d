//! Scroll controller
//!
//! Owns the authoritative scroll offset for one surface: clamps every
//! request, keeps the thumb derived from the offset, funnels all application
//! through the frame scheduler, and runs the post-release glide.
//!
//! Input handlers only latch live fields and request a tick; the pending
//! applier reads those fields when the host delivers the refresh callback.
//! That is what makes a burst of same-tick events collapse into one surface
//! write without ever dropping the newest sample.

use std::mem;

use scrollrail_animation::frame::{FrameScheduler, FrameSource};
use scrollrail_animation::glide::{self, Glide};
use scrollrail_core::events::{gesture_events, wheel_step, GesturePhase, InputEvent};
use scrollrail_core::{GestureMode, ScrollConfig, TrackMetrics};
use tracing::{debug, trace};

use crate::normalizer::GestureState;
use crate::surface::{ListenerSet, ScrollBackend, ScrollSurface};

/// What a scheduled refresh tick should apply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UpdateKind {
    /// Quantized wheel step from `wheel_step`
    Wheel,
    /// Thumb drag mapping from the live pointer position
    ThumbDrag,
    /// Summed un-applied touch deltas from `pan_delta`
    TouchPan,
    /// Programmatic or rail-jump target from `target`
    Target,
    /// Adopt the native scroll position once
    NativeSync,
    /// One tick of the inertial glide
    GlideTick,
}

/// The scroll engine for one instrumented surface
///
/// Constructed through [`ScrollRegistry::acquire`](crate::ScrollRegistry::acquire),
/// which enforces one controller per surface.
pub struct ScrollController {
    surface: Box<dyn ScrollSurface>,
    frames: FrameScheduler<UpdateKind>,
    config: ScrollConfig,
    backend: ScrollBackend,
    listeners: ListenerSet,
    metrics: TrackMetrics,
    /// The authoritative offset; only ever mutated through `apply`
    offset: f32,
    gesture: GestureState,
    glide: Glide,

    // Live fields the pending applier reads at tick time.
    wheel_step: f32,
    pointer_position: f32,
    pan_delta: f32,
    target: f32,
    /// The native fallback hands over exactly once
    native_synced: bool,
}

impl ScrollController {
    pub(crate) fn new(
        mut surface: Box<dyn ScrollSurface>,
        frame_source: Box<dyn FrameSource>,
        config: ScrollConfig,
    ) -> Self {
        let capabilities = surface.capabilities();
        let backend = ScrollBackend::resolve(capabilities, &config);
        let listeners = ListenerSet::resolve(capabilities, backend);
        surface.install_rail();
        surface.attach(listeners);
        let metrics = Self::read_metrics(surface.as_ref(), &config);
        debug!(?backend, ?listeners, "scroll controller attached");

        let mut controller = Self {
            surface,
            frames: FrameScheduler::new(frame_source),
            config,
            backend,
            listeners,
            metrics,
            offset: 0.0,
            gesture: GestureState::new(),
            glide: Glide::new(),
            wheel_step: 0.0,
            pointer_position: 0.0,
            pan_delta: 0.0,
            target: 0.0,
            native_synced: false,
        };
        controller.sync_thumb();
        controller
    }

    fn read_metrics(surface: &dyn ScrollSurface, config: &ScrollConfig) -> TrackMetrics {
        let metrics = surface.metrics();
        TrackMetrics::compute(
            metrics.content_height,
            metrics.visible_height,
            metrics.track_length,
            config.min_thumb_length,
        )
    }

    /// The authoritative scroll offset
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn metrics(&self) -> TrackMetrics {
        self.metrics
    }

    /// Thumb position derived from the current offset
    pub fn thumb_position(&self) -> f32 {
        self.metrics.thumb_position(self.offset)
    }

    pub fn gesture_mode(&self) -> GestureMode {
        self.gesture.mode()
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_coasting()
    }

    /// Whether an application tick is scheduled; hosts with a pull-based
    /// frame loop use this to decide if another tick is needed.
    pub fn needs_frame(&self) -> bool {
        self.frames.is_pending()
    }

    /// Request a clamped offset; application is deferred to the next refresh
    /// tick so repeated calls within one interval collapse into one write.
    pub fn scroll_to(&mut self, offset: f32) {
        self.target = self.metrics.clamp_offset(offset);
        self.frames.request(UpdateKind::Target);
    }

    /// Recompute geometry after an external layout change. Idempotent.
    pub fn update(&mut self) {
        self.metrics = Self::read_metrics(self.surface.as_ref(), &self.config);
        let clamped = self.metrics.clamp_offset(self.offset);
        if clamped != self.offset {
            self.offset = clamped;
            self.surface.set_content_offset(self.backend, self.offset);
        }
        self.sync_thumb();
    }

    /// Normalizer entry point: classify one host event, update gesture
    /// state, and schedule its application.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: f64) {
        match event {
            InputEvent::Wheel { raw_delta } => {
                if !self.gesture.mode().accepts_gesture_start() {
                    return;
                }
                if self.gesture.mode() == GestureMode::Idle {
                    self.interrupt();
                    self.gesture.transition(gesture_events::WHEEL);
                }
                // only the sign survives; magnitude is quantized
                self.wheel_step = wheel_step(raw_delta, self.config.wheel_increment);
                self.frames.request(UpdateKind::Wheel);
            }

            InputEvent::ThumbDrag {
                phase: GesturePhase::Start,
                pointer_y,
            } => {
                if !self.gesture.mode().accepts_gesture_start() {
                    return;
                }
                self.interrupt();
                let thumb_top = self.thumb_position();
                self.gesture.begin_thumb_drag(pointer_y, thumb_top);
                self.gesture.transition(gesture_events::THUMB_PRESS);
                self.pointer_position = pointer_y;
            }
            InputEvent::ThumbDrag {
                phase: GesturePhase::Move,
                pointer_y,
            } => {
                if self.gesture.mode() != GestureMode::DraggingThumb {
                    return;
                }
                self.pointer_position = pointer_y;
                self.frames.request(UpdateKind::ThumbDrag);
            }
            InputEvent::ThumbDrag {
                phase: GesturePhase::End,
                ..
            } => {
                self.gesture.transition(gesture_events::POINTER_RELEASE);
            }

            InputEvent::RailPress { pointer_y } => {
                if !self.gesture.mode().accepts_gesture_start() {
                    return;
                }
                self.interrupt();
                self.gesture.transition(gesture_events::RAIL_PRESS);
                self.target = self.metrics.offset_for_track(pointer_y);
                self.frames.request(UpdateKind::Target);
            }

            InputEvent::TouchPan {
                phase: GesturePhase::Start,
                touch_y,
            } => {
                if !self.gesture.mode().accepts_gesture_start() {
                    return;
                }
                self.interrupt();
                self.gesture.begin_touch(touch_y, now_ms);
                self.gesture.transition(gesture_events::TOUCH_START);
            }
            InputEvent::TouchPan {
                phase: GesturePhase::Move,
                touch_y,
            } => {
                if self.gesture.mode() != GestureMode::TouchPanning {
                    return;
                }
                // sum un-applied deltas so no motion is lost between ticks
                self.pan_delta += self.gesture.touch_sample(touch_y);
                self.frames.request(UpdateKind::TouchPan);
            }
            InputEvent::TouchPan {
                phase: GesturePhase::End,
                ..
            } => {
                if self.gesture.mode() != GestureMode::TouchPanning {
                    return;
                }
                let velocity = self.gesture.release_velocity(now_ms);
                self.gesture.transition(gesture_events::TOUCH_END);
                if self.glide.launch(velocity, now_ms) {
                    self.frames.request(UpdateKind::GlideTick);
                }
            }

            InputEvent::ScrollSync => {
                if self.native_synced || !self.listeners.native_scroll {
                    return;
                }
                // the native position is the source of truth exactly once;
                // detach immediately so later synthetic writes cannot echo
                // back as another sync
                self.native_synced = true;
                self.surface.detach_native_scroll();
                self.listeners.native_scroll = false;
                self.frames.request(UpdateKind::NativeSync);
            }
        }
    }

    /// Refresh tick: apply whatever update is pending from the live fields
    pub fn on_frame(&mut self, now_ms: f64) {
        let Some(kind) = self.frames.take() else {
            return;
        };
        trace!(?kind, "frame tick");
        match kind {
            UpdateKind::Wheel => {
                let step = mem::take(&mut self.wheel_step);
                self.apply(self.offset + step);
                self.gesture.transition(gesture_events::SETTLED);
            }
            UpdateKind::ThumbDrag => {
                let thumb_top = self.gesture.thumb_target(self.pointer_position);
                self.apply(self.metrics.offset_for_thumb(thumb_top));
            }
            UpdateKind::TouchPan => {
                let delta = mem::take(&mut self.pan_delta);
                self.apply(self.offset + delta);
                // a release may have launched the glide while this pan tick
                // was still pending; its first tick re-arms here
                if self.glide.is_coasting() {
                    self.frames.request(UpdateKind::GlideTick);
                }
            }
            UpdateKind::Target => {
                self.apply(self.target);
                self.gesture.transition(gesture_events::SETTLED);
            }
            UpdateKind::NativeSync => {
                // content already sits at the native position; only the
                // synthetic side needs to catch up
                self.offset = self.metrics.clamp_offset(self.surface.native_offset());
                self.sync_thumb();
            }
            UpdateKind::GlideTick => self.glide_tick(now_ms),
        }
    }

    fn glide_tick(&mut self, now_ms: f64) {
        let Some(delta) = self.glide.delta_at(now_ms) else {
            return;
        };
        self.apply(self.offset - delta);
        if delta.abs() <= glide::SETTLE_DELTA {
            self.glide.settle();
        } else if self.offset <= 0.0 || self.offset >= self.metrics.max_offset() {
            trace!(offset = self.offset, "glide saturated at boundary");
            self.glide.settle();
        } else {
            self.frames.request(UpdateKind::GlideTick);
        }
    }

    /// The clamped setter: the only place the offset and its two visual
    /// projections (content position, thumb) are written.
    fn apply(&mut self, offset: f32) {
        self.offset = self.metrics.clamp_offset(offset);
        self.surface.set_content_offset(self.backend, self.offset);
        self.sync_thumb();
        trace!(offset = self.offset, "offset applied");
    }

    fn sync_thumb(&mut self) {
        self.surface
            .set_thumb(self.metrics.thumb_position(self.offset), self.metrics.thumb_length);
    }

    /// A new gesture takes over: kill the glide and any pending application
    /// left behind by the previous gesture, and drop its latched input.
    fn interrupt(&mut self) {
        self.glide.settle();
        self.frames.stop();
        self.wheel_step = 0.0;
        self.pan_delta = 0.0;
    }

    pub(crate) fn tag_surface(&mut self, tag: u64) {
        self.surface.set_instance_tag(tag);
    }

    /// Full teardown: detach listeners, cancel pending work, restore the
    /// surface structure. Called by the registry on destroy.
    pub(crate) fn teardown(&mut self) {
        self.frames.stop();
        self.glide.settle();
        self.surface.detach(self.listeners);
        self.surface.remove_rail();
        self.surface.clear_instance_tag();
        debug!("scroll controller detached");
    }
}
