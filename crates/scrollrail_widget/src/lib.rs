//! Scrollrail widget
//!
//! The scroll controller that owns the authoritative offset, the instance
//! registry, and the collaborator traits the hosting environment implements.
//!
//! A host wires three things together:
//!
//! ```ignore
//! use scrollrail_widget::{HeadlessSurface, ManualFrames, ScrollRegistry};
//! use scrollrail_core::ScrollConfig;
//!
//! let mut registry = ScrollRegistry::new();
//! let id = registry.acquire(
//!     Box::new(HeadlessSurface::new(4000.0, 600.0, 600.0)),
//!     Box::new(ManualFrames::new()),
//!     ScrollConfig::default(),
//! );
//!
//! // forward host input, then deliver refresh ticks:
//! let controller = registry.get_mut(id).unwrap();
//! controller.handle_input(InputEvent::Wheel { raw_delta: 480.0 }, now_ms);
//! controller.on_frame(now_ms);
//! ```
//!
//! Real hosts replace [`HeadlessSurface`] and [`ManualFrames`] with wrappers
//! over their element tree and animation-frame primitive.

pub mod controller;
pub mod headless;
pub mod normalizer;
pub mod registry;
pub mod surface;

pub use controller::ScrollController;
pub use headless::{FrameLog, HeadlessSurface, ManualFrames, SurfaceState, SurfaceWrite};
pub use registry::{ScrollId, ScrollRegistry};
pub use surface::{
    ListenerSet, ScrollBackend, ScrollSurface, SurfaceCapabilities, SurfaceMetrics,
};

pub use scrollrail_animation::{FrameHandle, FrameSource};
pub use scrollrail_core::{GesturePhase, InputEvent, ScrollConfig};
