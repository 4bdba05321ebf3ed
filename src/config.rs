//! Converter configuration.

use crate::geometry::Size;
use crate::layout::DEFAULT_FONT_SIZE;
use crate::resource::ResourceOptions;

/// Settings shared by every conversion a [`crate::convert::Converter`] runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Canvas width used by the file and batch entry points.
    pub canvas_width: f32,
    /// Canvas height used by the file and batch entry points.
    pub canvas_height: f32,
    /// Extension of markup files picked up by batch conversion.
    pub markup_extension: String,
    /// Extension of the stylesheet paired with a markup file.
    pub stylesheet_extension: String,
    /// Font given to every text component.
    pub default_font: String,
    /// Font size in pixels when nothing sets one.
    pub default_font_size: f32,
    /// Resource loading switches.
    pub resources: ResourceOptions,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1920.0,
            canvas_height: 1080.0,
            markup_extension: "uxml".to_string(),
            stylesheet_extension: "uss".to_string(),
            default_font: "LegacyRuntime".to_string(),
            default_font_size: DEFAULT_FONT_SIZE,
            resources: ResourceOptions::default(),
        }
    }
}

impl ConverterConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size (builder).
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the batch markup extension, without the dot (builder).
    pub fn with_markup_extension(mut self, extension: impl Into<String>) -> Self {
        self.markup_extension = extension.into();
        self
    }

    /// Set the paired stylesheet extension, without the dot (builder).
    pub fn with_stylesheet_extension(mut self, extension: impl Into<String>) -> Self {
        self.stylesheet_extension = extension.into();
        self
    }

    /// Set the default font (builder).
    pub fn with_font(mut self, font: impl Into<String>, size: f32) -> Self {
        self.default_font = font.into();
        self.default_font_size = size;
        self
    }

    /// Set the resource options (builder).
    pub fn with_resources(mut self, resources: ResourceOptions) -> Self {
        self.resources = resources;
        self
    }

    /// The canvas as a [`Size`].
    pub fn canvas(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConverterConfig::default();
        assert_eq!(config.canvas(), Size::new(1920.0, 1080.0));
        assert_eq!(config.markup_extension, "uxml");
        assert_eq!(config.stylesheet_extension, "uss");
        assert_eq!(config.default_font, "LegacyRuntime");
        assert_eq!(config.default_font_size, 14.0);
        assert!(config.resources.enable_caching);
        assert!(!config.resources.enable_debug_logging);
    }

    #[test]
    fn builders() {
        let config = ConverterConfig::new()
            .with_canvas(800.0, 600.0)
            .with_markup_extension("xml")
            .with_font("Arial", 12.0);
        assert_eq!(config.canvas(), Size::new(800.0, 600.0));
        assert_eq!(config.markup_extension, "xml");
        assert_eq!(config.default_font, "Arial");
        assert_eq!(config.default_font_size, 12.0);
    }
}
