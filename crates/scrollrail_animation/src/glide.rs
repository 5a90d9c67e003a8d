//! Inertial glide
//!
//! Post-release deceleration that keeps the content coasting after a touch
//! pan ends. The model is one fixed exponential decay of the release
//! velocity; each tick contributes `-velocity * exp(-elapsed / DECAY_MS)` and
//! the glide terminates only when that per-tick delta drops below the visible
//! floor or the offset saturates at a boundary. The constants are part of the
//! felt behavior and are not configurable.

use tracing::debug;

/// Exponential decay constant, in milliseconds
pub const DECAY_MS: f32 = 325.0;
/// Minimum release velocity, in px/ms, for a glide to launch
pub const LAUNCH_VELOCITY: f32 = 10.0;
/// Per-tick delta, in px, below which motion is no longer visible
pub const SETTLE_DELTA: f32 = 0.5;

/// Glide animation states
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GlideState {
    #[default]
    Idle,
    /// Coasting on the decaying release velocity
    Coasting { velocity: f32, started_at: f64 },
}

/// The inertial animation as an explicit state machine
///
/// The controller drives it from refresh ticks: sample a delta with
/// [`delta_at`], apply it through the clamped setter, then either reschedule
/// or [`settle`].
///
/// [`delta_at`]: Glide::delta_at
/// [`settle`]: Glide::settle
#[derive(Debug, Default)]
pub struct Glide {
    state: GlideState,
}

impl Glide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start coasting if the release velocity clears the launch gate.
    /// Returns whether a glide was started.
    pub fn launch(&mut self, velocity: f32, now_ms: f64) -> bool {
        if velocity.abs() <= LAUNCH_VELOCITY {
            debug!(velocity, "release velocity below glide threshold");
            return false;
        }
        self.state = GlideState::Coasting {
            velocity,
            started_at: now_ms,
        };
        debug!(velocity, "glide launched");
        true
    }

    pub fn is_coasting(&self) -> bool {
        matches!(self.state, GlideState::Coasting { .. })
    }

    pub fn state(&self) -> GlideState {
        self.state
    }

    /// Offset delta for a tick at `now_ms`, or `None` when idle
    pub fn delta_at(&self, now_ms: f64) -> Option<f32> {
        let GlideState::Coasting {
            velocity,
            started_at,
        } = self.state
        else {
            return None;
        };
        let elapsed = (now_ms - started_at).max(0.0) as f32;
        Some(-velocity * (-elapsed / DECAY_MS).exp())
    }

    /// Stop the animation and discard the velocity estimate
    pub fn settle(&mut self) {
        if self.is_coasting() {
            debug!("glide settled");
        }
        self.state = GlideState::Idle;
    }
}

/// Release-velocity estimate from the touch accumulators, in px/ms:
/// `DECAY_MS * mean_sample_distance / elapsed`.
pub fn release_velocity(accumulated_distance: f32, sample_count: u32, elapsed_ms: f64) -> f32 {
    if sample_count == 0 || elapsed_ms <= 0.0 {
        return 0.0;
    }
    DECAY_MS * (accumulated_distance / sample_count as f32) / elapsed_ms as f32
}
