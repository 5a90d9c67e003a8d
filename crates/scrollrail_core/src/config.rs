//! Scroll behavior configuration

/// Configuration for a scroll controller instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Pixels applied per wheel step. Wheel input is quantized to this value
    /// regardless of the raw delta reported by the device.
    pub wheel_increment: f32,
    /// Prefer transform-based content movement over native scrolling when the
    /// host supports it.
    pub use_css_transforms: bool,
    /// Minimum thumb length in pixels, so the thumb stays grabbable on very
    /// tall content.
    pub min_thumb_length: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            wheel_increment: 120.0,
            use_css_transforms: true,
            min_thumb_length: 30.0,
        }
    }
}

impl ScrollConfig {
    /// Create config that scrolls through the host's native scroll position
    /// even when transforms are available
    pub fn native_scrolling() -> Self {
        Self {
            use_css_transforms: false,
            ..Default::default()
        }
    }

    /// Override the wheel step size
    pub fn with_wheel_increment(mut self, increment: f32) -> Self {
        self.wheel_increment = increment;
        self
    }
}
