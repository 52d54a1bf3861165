//! Configuration for SVG rendering

use crate::layout::LayoutConfig;

use super::text::DEFAULT_CHAR_WIDTH_RATIO;

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

/// Configuration for the document assembler
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Average glyph width as a fraction of font size, used for truncation
    pub char_width_ratio: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            char_width_ratio: DEFAULT_CHAR_WIDTH_RATIO,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the glyph width ratio used for truncation budgets
    pub fn with_char_width_ratio(mut self, ratio: f64) -> Self {
        self.char_width_ratio = ratio;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert!(!config.standalone);
        assert!(config.pretty_print);

        let render = RenderConfig::default();
        assert_eq!(render.char_width_ratio, 0.55);
        assert_eq!(render.layout, LayoutConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new()
            .with_layout(LayoutConfig::new().with_padding_x(40.0))
            .with_svg(SvgConfig::new().with_standalone(true).with_pretty_print(false))
            .with_char_width_ratio(0.6);

        assert_eq!(config.layout.padding_x, 40.0);
        assert!(config.svg.standalone);
        assert!(!config.svg.pretty_print);
        assert_eq!(config.char_width_ratio, 0.6);
    }
}
