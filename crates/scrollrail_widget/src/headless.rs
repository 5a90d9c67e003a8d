//! Headless host collaborators
//!
//! In-memory stand-ins for the host services: a surface that records every
//! write it receives, and a hand-cranked frame source. Tests, the bundled
//! example and embedders without a real element tree drive the engine
//! through these.

use std::sync::{Arc, Mutex};

use scrollrail_animation::{FrameHandle, FrameSource};

use crate::surface::{
    ListenerSet, ScrollBackend, ScrollSurface, SurfaceCapabilities, SurfaceMetrics,
};

/// One write the engine issued against the surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceWrite {
    ContentOffset { backend: ScrollBackend, offset: f32 },
    Thumb { position: f32, length: f32 },
}

/// Observable state of a [`HeadlessSurface`], shared with the test/embedder
/// side while the surface itself is boxed away inside a controller
#[derive(Debug, Default)]
pub struct SurfaceState {
    pub capabilities: SurfaceCapabilities,
    pub metrics: SurfaceMetrics,
    pub native_offset: f32,
    pub writes: Vec<SurfaceWrite>,
    pub rail_installed: bool,
    pub listeners: ListenerSet,
    pub tag: Option<u64>,
}

impl SurfaceState {
    /// Last applied content offset, if any
    pub fn content_offset(&self) -> Option<f32> {
        self.writes.iter().rev().find_map(|write| match write {
            SurfaceWrite::ContentOffset { offset, .. } => Some(*offset),
            SurfaceWrite::Thumb { .. } => None,
        })
    }

    /// Last applied thumb geometry as `(position, length)`, if any
    pub fn thumb(&self) -> Option<(f32, f32)> {
        self.writes.iter().rev().find_map(|write| match write {
            SurfaceWrite::Thumb { position, length } => Some((*position, *length)),
            SurfaceWrite::ContentOffset { .. } => None,
        })
    }

    /// Number of content-offset writes issued so far
    pub fn content_write_count(&self) -> usize {
        self.writes
            .iter()
            .filter(|write| matches!(write, SurfaceWrite::ContentOffset { .. }))
            .count()
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

/// A surface with no element tree behind it
pub struct HeadlessSurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl HeadlessSurface {
    /// Create a surface reporting the given geometry and full capabilities
    /// (pointer events, touch, transforms).
    pub fn new(content_height: f32, visible_height: f32, track_length: f32) -> Self {
        let state = SurfaceState {
            capabilities: SurfaceCapabilities {
                pointer_events: true,
                touch: true,
                css_transforms: true,
            },
            metrics: SurfaceMetrics {
                content_height,
                visible_height,
                track_length,
            },
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn with_capabilities(self, capabilities: SurfaceCapabilities) -> Self {
        self.state.lock().unwrap().capabilities = capabilities;
        self
    }

    /// Wrap the same underlying state again, as a second acquisition of the
    /// same host element would.
    pub fn from_state(state: Arc<Mutex<SurfaceState>>) -> Self {
        Self { state }
    }

    /// Handle for observing writes after the surface is boxed away
    pub fn state(&self) -> Arc<Mutex<SurfaceState>> {
        self.state.clone()
    }
}

impl ScrollSurface for HeadlessSurface {
    fn capabilities(&self) -> SurfaceCapabilities {
        self.state.lock().unwrap().capabilities
    }

    fn metrics(&self) -> SurfaceMetrics {
        self.state.lock().unwrap().metrics
    }

    fn install_rail(&mut self) {
        self.state.lock().unwrap().rail_installed = true;
    }

    fn remove_rail(&mut self) {
        self.state.lock().unwrap().rail_installed = false;
    }

    fn attach(&mut self, listeners: ListenerSet) {
        let mut state = self.state.lock().unwrap();
        let current = &mut state.listeners;
        current.wheel |= listeners.wheel;
        current.pointer |= listeners.pointer;
        current.mouse |= listeners.mouse;
        current.touch |= listeners.touch;
        current.native_scroll |= listeners.native_scroll;
    }

    fn detach(&mut self, listeners: ListenerSet) {
        let mut state = self.state.lock().unwrap();
        let current = &mut state.listeners;
        current.wheel &= !listeners.wheel;
        current.pointer &= !listeners.pointer;
        current.mouse &= !listeners.mouse;
        current.touch &= !listeners.touch;
        current.native_scroll &= !listeners.native_scroll;
    }

    fn detach_native_scroll(&mut self) {
        self.state.lock().unwrap().listeners.native_scroll = false;
    }

    fn set_instance_tag(&mut self, tag: u64) {
        self.state.lock().unwrap().tag = Some(tag);
    }

    fn instance_tag(&self) -> Option<u64> {
        self.state.lock().unwrap().tag
    }

    fn clear_instance_tag(&mut self) {
        self.state.lock().unwrap().tag = None;
    }

    fn set_content_offset(&mut self, backend: ScrollBackend, offset: f32) {
        let mut state = self.state.lock().unwrap();
        if backend == ScrollBackend::Native {
            state.native_offset = offset;
        }
        state.writes.push(SurfaceWrite::ContentOffset { backend, offset });
    }

    fn native_offset(&self) -> f32 {
        self.state.lock().unwrap().native_offset
    }

    fn set_thumb(&mut self, position: f32, length: f32) {
        self.state
            .lock()
            .unwrap()
            .writes
            .push(SurfaceWrite::Thumb { position, length });
    }
}

/// Log of what a [`ManualFrames`] source has been asked to do
#[derive(Debug, Default)]
pub struct FrameLog {
    pub scheduled: u64,
    pub cancelled: u64,
}

/// A frame source the embedder cranks by hand
///
/// Scheduling only hands out monotonically increasing handles; the embedder
/// decides when a "refresh tick" happens by calling
/// [`ScrollController::on_frame`](crate::ScrollController::on_frame) with an
/// explicit timestamp.
#[derive(Default)]
pub struct ManualFrames {
    log: Arc<Mutex<FrameLog>>,
    next_handle: u64,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for observing schedule/cancel counts after boxing
    pub fn log(&self) -> Arc<Mutex<FrameLog>> {
        self.log.clone()
    }
}

impl FrameSource for ManualFrames {
    fn schedule(&mut self) -> FrameHandle {
        self.next_handle += 1;
        self.log.lock().unwrap().scheduled += 1;
        FrameHandle(self.next_handle)
    }

    fn cancel(&mut self, _handle: FrameHandle) {
        self.log.lock().unwrap().cancelled += 1;
    }
}
