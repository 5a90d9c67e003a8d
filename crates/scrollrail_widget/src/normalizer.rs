//! Gesture state and input normalization
//!
//! One transient record per interaction sequence: the current mode, the
//! reference coordinate of the last sample, the grab offset pinning the
//! pointer to the thumb, and the touch accumulators the release-velocity
//! estimate is computed from.

use scrollrail_animation::glide;
use scrollrail_core::events::GestureEvent;
use scrollrail_core::{GestureMode, StateTransitions};
use tracing::debug;

/// Per-interaction gesture state
///
/// Created (re-seeded) on gesture start and consumed on gesture end; the
/// fields are live: appliers scheduled on the frame tick read them at fire
/// time rather than receiving per-event snapshots.
#[derive(Debug, Default)]
pub struct GestureState {
    mode: GestureMode,
    /// Pointer/touch coordinate at gesture start or last sample
    reference_position: f32,
    /// Pointer-to-thumb-top delta, fixed for the duration of a thumb drag
    grab_offset: f32,
    /// Signed sum of pan deltas since touch start
    accumulated_distance: f32,
    /// Number of pan samples since touch start
    sample_count: u32,
    /// Touch gesture start time, in ms
    started_at: f64,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Drive the mode state machine; invalid events in the current mode are
    /// ignored. Returns whether a transition happened.
    pub fn transition(&mut self, event: GestureEvent) -> bool {
        match self.mode.on_event(event) {
            Some(next) => {
                debug!(from = ?self.mode, to = ?next, "gesture transition");
                self.mode = next;
                true
            }
            None => false,
        }
    }

    /// Seed a thumb drag: the grab offset keeps the pointer pinned to the
    /// spot on the thumb where it was pressed.
    pub fn begin_thumb_drag(&mut self, pointer_y: f32, thumb_top: f32) {
        self.grab_offset = pointer_y - thumb_top;
        self.reference_position = pointer_y;
    }

    /// Thumb-top target for the current pointer position during a drag
    pub fn thumb_target(&self, pointer_y: f32) -> f32 {
        pointer_y - self.grab_offset
    }

    /// Seed a touch pan and zero the velocity accumulators
    pub fn begin_touch(&mut self, touch_y: f32, now_ms: f64) {
        self.reference_position = touch_y;
        self.accumulated_distance = 0.0;
        self.sample_count = 0;
        self.started_at = now_ms;
    }

    /// Ingest one touch sample: returns the relative delta
    /// (`reference - touch_y`), moves the reference to the new position and
    /// feeds the accumulators.
    pub fn touch_sample(&mut self, touch_y: f32) -> f32 {
        let delta = self.reference_position - touch_y;
        self.reference_position = touch_y;
        self.accumulated_distance += delta;
        self.sample_count += 1;
        delta
    }

    /// Velocity estimate at touch release, in px/ms
    pub fn release_velocity(&self, now_ms: f64) -> f32 {
        glide::release_velocity(
            self.accumulated_distance,
            self.sample_count,
            now_ms - self.started_at,
        )
    }
}
