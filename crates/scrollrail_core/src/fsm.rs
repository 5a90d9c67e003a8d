//! Gesture state machine
//!
//! One transient mode per interaction sequence, driven by an explicit
//! transition table instead of ad-hoc flags. Events that are not valid in the
//! current mode produce no transition.

use crate::events::GestureEvent;

/// Trait for state types that transition on gesture events
///
/// Implementations return the new state, or `None` if the event does not
/// cause a transition from the current state.
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    fn on_event(&self, event: GestureEvent) -> Option<Self>;
}

/// Current interaction mode of a scroll controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureMode {
    /// No interaction in progress
    #[default]
    Idle,
    /// Thumb grabbed, pointer moves map inversely to offsets
    DraggingThumb,
    /// Rail pressed outside the thumb; resolves to a one-shot jump
    DraggingRail,
    /// Touch pan over the content, feeding the velocity accumulators
    TouchPanning,
    /// Wheel step pending application
    Wheeling,
}

impl GestureMode {
    /// Whether any interaction is in progress
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureMode::Idle)
    }

    /// Whether this mode may hand control to a newly starting gesture.
    /// Wheeling is transient: a press or touch may interrupt it.
    pub fn accepts_gesture_start(&self) -> bool {
        matches!(self, GestureMode::Idle | GestureMode::Wheeling)
    }
}

impl StateTransitions for GestureMode {
    fn on_event(&self, event: GestureEvent) -> Option<Self> {
        use crate::events::gesture_events::*;
        match (self, event) {
            (GestureMode::Idle, THUMB_PRESS) => Some(GestureMode::DraggingThumb),
            (GestureMode::Idle, RAIL_PRESS) => Some(GestureMode::DraggingRail),
            (GestureMode::Idle, TOUCH_START) => Some(GestureMode::TouchPanning),
            (GestureMode::Idle, WHEEL) => Some(GestureMode::Wheeling),
            // Wheeling is interruptible by every other gesture start
            (GestureMode::Wheeling, THUMB_PRESS) => Some(GestureMode::DraggingThumb),
            (GestureMode::Wheeling, RAIL_PRESS) => Some(GestureMode::DraggingRail),
            (GestureMode::Wheeling, TOUCH_START) => Some(GestureMode::TouchPanning),
            (GestureMode::Wheeling, SETTLED) => Some(GestureMode::Idle),
            (GestureMode::DraggingThumb, POINTER_RELEASE) => Some(GestureMode::Idle),
            // A rail press is one-shot: it ends when its jump is applied
            (GestureMode::DraggingRail, SETTLED) => Some(GestureMode::Idle),
            (GestureMode::DraggingRail, POINTER_RELEASE) => Some(GestureMode::Idle),
            (GestureMode::TouchPanning, TOUCH_END) => Some(GestureMode::Idle),
            _ => None,
        }
    }
}
