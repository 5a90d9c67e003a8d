//! Frame scheduling
//!
//! Wheel and move events can fire far more often than the display refreshes;
//! applying each one causes redundant layout writes. The scheduler enforces
//! at most one application per instance per refresh interval: while a request
//! is pending, further requests are dropped. Appliers read live state at fire
//! time rather than per-event snapshots, so the latest sample still wins.

use tracing::trace;

/// Opaque handle for a scheduled animation-frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

/// Host animation-frame primitive
///
/// `schedule` arranges for a callback before the next repaint and returns a
/// handle; `cancel` revokes a handle that has not fired yet. Supplied by the
/// hosting environment.
pub trait FrameSource {
    fn schedule(&mut self) -> FrameHandle;
    fn cancel(&mut self, handle: FrameHandle);
}

/// Rate limiter over a [`FrameSource`]
///
/// State machine: {idle} → `request` → {pending} → (tick fires, [`take`]
/// consumes → idle) or (`stop` → idle, handler dropped).
///
/// [`take`]: FrameScheduler::take
pub struct FrameScheduler<K> {
    source: Box<dyn FrameSource>,
    pending: Option<(FrameHandle, K)>,
}

impl<K: Copy + std::fmt::Debug> FrameScheduler<K> {
    pub fn new(source: Box<dyn FrameSource>) -> Self {
        Self {
            source,
            pending: None,
        }
    }

    /// Schedule `kind` for the next refresh tick. Returns `false` if a
    /// request is already pending; the new kind is dropped and the pending
    /// applier will read whatever state is current when the tick fires.
    pub fn request(&mut self, kind: K) -> bool {
        if self.pending.is_some() {
            trace!(?kind, "frame already pending, request dropped");
            return false;
        }
        let handle = self.source.schedule();
        self.pending = Some((handle, kind));
        true
    }

    /// Consume the pending kind when the host delivers the refresh tick
    pub fn take(&mut self) -> Option<K> {
        self.pending.take().map(|(_, kind)| kind)
    }

    /// Whether a request is in flight
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel an in-flight, not-yet-fired request
    pub fn stop(&mut self) {
        if let Some((handle, kind)) = self.pending.take() {
            trace!(?kind, "pending frame cancelled");
            self.source.cancel(handle);
        }
    }
}

impl<K> Drop for FrameScheduler<K> {
    fn drop(&mut self) {
        if let Some((handle, _)) = self.pending.take() {
            self.source.cancel(handle);
        }
    }
}
