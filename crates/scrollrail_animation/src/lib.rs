//! Scrollrail animation system
//!
//! Two small pieces of timing machinery:
//!
//! - **Frame scheduling**: coalesces bursts of input callbacks into at most
//!   one application per display refresh tick.
//! - **Glide**: the inertial post-release deceleration, a single fixed
//!   exponential decay of the release velocity.

pub mod frame;
pub mod glide;

pub use frame::{FrameHandle, FrameScheduler, FrameSource};
pub use glide::{Glide, GlideState};
