//! Host collaborator traits
//!
//! The hosting environment supplies two services: a [`ScrollSurface`]
//! wrapping the instrumented viewport element, and the animation-frame
//! primitive ([`scrollrail_animation::FrameSource`]). Capabilities are
//! reported once, at construction; the controller resolves its backend and
//! listener set from them a single time and never re-checks capability flags
//! inline.

use scrollrail_core::ScrollConfig;

/// Class applied to the instrumented viewport element
pub const SURFACE_CLASS: &str = "scrollrail";
/// Class for the injected rail element
pub const RAIL_CLASS: &str = "scrollrail-rail";
/// Class for the injected thumb element
pub const THUMB_CLASS: &str = "scrollrail-thumb";
/// Attribute carrying the instance tag on the viewport element
pub const INSTANCE_ATTRIBUTE: &str = "data-scrollrail-id";

/// What the host environment can deliver, reported once at construction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceCapabilities {
    /// Unified pointer events cover mouse, touch and pen with one listener
    pub pointer_events: bool,
    /// Discrete touch events are available
    pub touch: bool,
    /// Content can be moved with a transform instead of native scrolling
    pub css_transforms: bool,
}

/// How the applied offset reaches the content
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBackend {
    /// Translate the content element; the host never scrolls natively
    Transforms,
    /// Write the native scroll position
    Native,
}

impl ScrollBackend {
    /// Resolved once at construction from capabilities and configuration
    pub fn resolve(capabilities: SurfaceCapabilities, config: &ScrollConfig) -> Self {
        if config.use_css_transforms && capabilities.css_transforms {
            ScrollBackend::Transforms
        } else {
            ScrollBackend::Native
        }
    }
}

/// Listener classes the controller asks the surface to attach
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerSet {
    pub wheel: bool,
    /// Unified pointer listener (pointer-capable hosts)
    pub pointer: bool,
    /// Separate mouse listeners (hosts without pointer events)
    pub mouse: bool,
    /// Separate touch listeners (hosts without pointer events)
    pub touch: bool,
    /// Native scroll notifications, for the sync fallback
    pub native_scroll: bool,
}

impl ListenerSet {
    /// Pointer-capable hosts get the single unified listener; everything
    /// else gets mouse and touch attached separately. The native scroll
    /// listener exists only on the native backend.
    pub fn resolve(capabilities: SurfaceCapabilities, backend: ScrollBackend) -> Self {
        Self {
            wheel: true,
            pointer: capabilities.pointer_events,
            mouse: !capabilities.pointer_events,
            touch: !capabilities.pointer_events && capabilities.touch,
            native_scroll: backend == ScrollBackend::Native,
        }
    }
}

/// Geometry snapshot read from the host
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceMetrics {
    pub content_height: f32,
    pub visible_height: f32,
    pub track_length: f32,
}

/// The instrumented viewport element, as seen by the engine
///
/// Implementations own all element plumbing: injecting the rail/thumb pair
/// (classes per the published constants), toggling listeners, carrying the
/// instance tag under [`INSTANCE_ATTRIBUTE`], and applying offset and thumb
/// writes.
pub trait ScrollSurface {
    fn capabilities(&self) -> SurfaceCapabilities;

    /// Current content/viewport/track geometry
    fn metrics(&self) -> SurfaceMetrics;

    /// Inject the rail and thumb elements
    fn install_rail(&mut self);

    /// Remove the injected rail, restoring the original structure
    fn remove_rail(&mut self);

    fn attach(&mut self, listeners: ListenerSet);

    fn detach(&mut self, listeners: ListenerSet);

    /// Drop only the native scroll listener, once the synthetic path has
    /// adopted the native position
    fn detach_native_scroll(&mut self);

    fn set_instance_tag(&mut self, tag: u64);

    fn instance_tag(&self) -> Option<u64>;

    fn clear_instance_tag(&mut self);

    /// Write the content offset through the resolved backend
    fn set_content_offset(&mut self, backend: ScrollBackend, offset: f32);

    /// Current native scroll position, read when adopting native state
    fn native_offset(&self) -> f32;

    /// Write thumb geometry: position along the rail, and thumb length
    fn set_thumb(&mut self, position: f32, length: f32);
}
