//! Track and thumb geometry
//!
//! Pure mapping math between the scroll offset and the thumb position along
//! the rail. The thumb position is always a function of the offset and the
//! geometry; the inverse mapping exists only for thumb drags.
//!
//! Degenerate geometry (content not taller than the viewport, or a thumb
//! filling the whole track) collapses every mapping to zero instead of
//! propagating NaN or infinity into displayed positions.

/// Geometry snapshot a controller maps offsets against
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    /// Full scrollable content height
    pub content_height: f32,
    /// Height of the visible viewport
    pub visible_height: f32,
    /// Length of the rail track the thumb travels along
    pub track_length: f32,
    /// Thumb length, proportional to `visible_height / content_height`
    pub thumb_length: f32,
}

impl TrackMetrics {
    /// Build metrics from raw host geometry, sizing the thumb proportionally
    /// with a minimum so it stays grabbable on very tall content.
    pub fn compute(
        content_height: f32,
        visible_height: f32,
        track_length: f32,
        min_thumb_length: f32,
    ) -> Self {
        let thumb_length = if content_height <= visible_height || content_height <= 0.0 {
            track_length
        } else {
            let proportional = track_length * visible_height / content_height;
            proportional.clamp(min_thumb_length.min(track_length), track_length)
        };

        Self {
            content_height,
            visible_height,
            track_length,
            thumb_length,
        }
    }

    /// Largest valid scroll offset; zero when content does not overflow
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.visible_height).max(0.0)
    }

    /// Whether there is anything to scroll
    pub fn is_scrollable(&self) -> bool {
        self.max_offset() > 0.0
    }

    /// Distance the thumb can travel along the track
    pub fn thumb_travel(&self) -> f32 {
        (self.track_length - self.thumb_length).max(0.0)
    }

    /// Clamp a requested offset into `[0, max_offset]`
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Thumb position for an offset: `offset / max_offset * thumb_travel`
    pub fn thumb_position(&self, offset: f32) -> f32 {
        let max = self.max_offset();
        let travel = self.thumb_travel();
        if max <= 0.0 || travel <= 0.0 {
            return 0.0;
        }
        self.clamp_offset(offset) / max * travel
    }

    /// Inverse mapping: offset for a thumb position, used during thumb drags
    pub fn offset_for_thumb(&self, thumb_position: f32) -> f32 {
        let travel = self.thumb_travel();
        if travel <= 0.0 {
            return 0.0;
        }
        thumb_position.clamp(0.0, travel) / travel * self.max_offset()
    }

    /// Offset for a press at `track_position` along the rail: the one-shot
    /// proportional jump for rail clicks.
    pub fn offset_for_track(&self, track_position: f32) -> f32 {
        if self.track_length <= 0.0 {
            return 0.0;
        }
        let fraction = track_position.clamp(0.0, self.track_length) / self.track_length;
        self.clamp_offset(fraction * self.max_offset())
    }
}
