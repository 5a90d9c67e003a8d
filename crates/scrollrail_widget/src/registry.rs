//! Instance registry
//!
//! Explicit, host-owned bookkeeping of live controllers. The surface carries
//! the instance tag (the id's raw `u64` form) so acquiring a controller for
//! an already-instrumented surface finds the existing instance instead of
//! stacking a second set of listeners and a second offset owner on the same
//! element.

use slotmap::{new_key_type, Key, KeyData, SlotMap};
use tracing::debug;

use scrollrail_animation::FrameSource;
use scrollrail_core::{Result, ScrollConfig, ScrollError};

use crate::controller::ScrollController;
use crate::surface::ScrollSurface;

new_key_type! {
    /// Unique identifier for a live scroll controller
    pub struct ScrollId;
}

impl ScrollId {
    /// Raw form carried on the surface's instance attribute
    pub fn as_tag(self) -> u64 {
        self.data().as_ffi()
    }

    /// Rebuild an id from a surface tag
    pub fn from_tag(tag: u64) -> Self {
        KeyData::from_ffi(tag).into()
    }
}

/// Registry of live controllers, one per instrumented surface
#[derive(Default)]
pub struct ScrollRegistry {
    instances: SlotMap<ScrollId, ScrollController>,
}

impl ScrollRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a controller for `surface`.
    ///
    /// If the surface already carries a live instance tag the existing id is
    /// returned and the passed-in collaborators are dropped (they duplicate
    /// services the registered controller already owns). Otherwise a new
    /// controller is constructed, registered and tagged.
    pub fn acquire(
        &mut self,
        surface: Box<dyn ScrollSurface>,
        frame_source: Box<dyn FrameSource>,
        config: ScrollConfig,
    ) -> ScrollId {
        if let Some(tag) = surface.instance_tag() {
            let id = ScrollId::from_tag(tag);
            if self.instances.contains_key(id) {
                debug!(tag, "surface already instrumented, reusing instance");
                return id;
            }
            // stale tag from a destroyed registry generation: fall through
            // and instrument afresh
        }

        let id = self.instances.insert_with_key(|id| {
            let mut controller = ScrollController::new(surface, frame_source, config);
            controller.tag_surface(id.as_tag());
            controller
        });
        debug!(tag = id.as_tag(), "scroll instance registered");
        id
    }

    pub fn get(&self, id: ScrollId) -> Option<&ScrollController> {
        self.instances.get(id)
    }

    pub fn get_mut(&mut self, id: ScrollId) -> Option<&mut ScrollController> {
        self.instances.get_mut(id)
    }

    /// Resolve the raw tag read off a surface back to a live id
    pub fn lookup(&self, tag: u64) -> Result<ScrollId> {
        let id = ScrollId::from_tag(tag);
        if self.instances.contains_key(id) {
            Ok(id)
        } else {
            Err(ScrollError::UnknownInstance(tag))
        }
    }

    /// Tear the controller down (detach listeners, cancel pending work,
    /// restore the surface) and drop it from the registry.
    pub fn destroy(&mut self, id: ScrollId) -> Result<()> {
        let Some(mut controller) = self.instances.remove(id) else {
            return Err(ScrollError::UnknownInstance(id.as_tag()));
        };
        controller.teardown();
        debug!(tag = id.as_tag(), "scroll instance destroyed");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
