//! Scrollrail core
//!
//! Input event model, gesture state machine, and track/thumb geometry for the
//! synthetic rail-and-thumb scroll engine.
//!
//! This crate is host-agnostic: it knows nothing about elements, listeners or
//! animation frames. It defines the vocabulary the widget crate speaks —
//! tagged input events, gesture modes with an explicit transition table, and
//! the pure offset/thumb mapping math.

pub mod config;
pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use config::ScrollConfig;
pub use error::{Result, ScrollError};
pub use events::{GesturePhase, InputEvent};
pub use fsm::{GestureMode, StateTransitions};
pub use geometry::TrackMetrics;
