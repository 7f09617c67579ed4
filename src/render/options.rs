//! Rendering options and configuration.

use super::Theme;

/// Options for rendering a document into elements.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Width of the host container in logical pixels
    pub container_width: f32,

    /// Horizontal space reserved around media (subtracted from the container width)
    pub media_inset: f32,

    /// Styling constants
    pub theme: Theme,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container width.
    pub fn with_container_width(mut self, width: f32) -> Self {
        self.container_width = width.max(0.0);
        self
    }

    /// Set the horizontal space reserved around media.
    pub fn with_media_inset(mut self, inset: f32) -> Self {
        self.media_inset = inset.max(0.0);
        self
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Width available to media after the inset.
    pub fn media_width(&self) -> f32 {
        (self.container_width - self.media_inset).max(0.0)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            container_width: 375.0,
            media_inset: 32.0,
            theme: Theme::default(),
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.container_width, 375.0);
        assert_eq!(options.media_width(), 343.0);
        assert!(!options.collect_stats);
    }

    #[test]
    fn test_builder_chain() {
        let options = RenderOptions::new()
            .with_container_width(600.0)
            .with_media_inset(40.0)
            .with_stats(true);
        assert_eq!(options.media_width(), 560.0);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_narrow_container_clamps() {
        let options = RenderOptions::new().with_container_width(20.0);
        assert_eq!(options.media_width(), 0.0);
        let options = RenderOptions::new().with_container_width(-5.0);
        assert_eq!(options.container_width, 0.0);
    }
}
