//! Configuration for the layout engine

/// Block sizes, gaps and font sizes used to stack the card content
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Height reserved for the logo slot
    pub logo_height: f64,

    /// Gap between the logo and the name
    pub logo_gap: f64,

    /// Gap between the name and the tagline
    pub tagline_gap: f64,

    /// Gap between the previous block and the feature row
    pub features_gap: f64,

    /// Vertical padding around the feature text, added to its font size
    pub pill_padding: f64,

    /// Distance from the bottom edge to the footer baseline
    pub footer_inset: f64,

    /// Baseline offset from a block's top, as a fraction of its font size
    pub baseline_ratio: f64,

    /// Horizontal padding on each side of the content area
    pub padding_x: f64,

    pub name_font_size: f64,
    pub tagline_font_size: f64,
    pub features_font_size: f64,
    pub footer_font_size: f64,
    pub text_logo_font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            logo_height: 80.0,
            logo_gap: 32.0,
            tagline_gap: 20.0,
            features_gap: 36.0,
            pill_padding: 20.0,
            footer_inset: 40.0,
            baseline_ratio: 0.8,
            padding_x: 80.0,
            name_font_size: 52.0,
            tagline_font_size: 22.0,
            features_font_size: 16.0,
            footer_font_size: 18.0,
            text_logo_font_size: 48.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logo slot height
    pub fn with_logo_height(mut self, height: f64) -> Self {
        self.logo_height = height;
        self
    }

    /// Set the horizontal content padding
    pub fn with_padding_x(mut self, padding: f64) -> Self {
        self.padding_x = padding;
        self
    }

    /// Set the footer distance from the bottom edge
    pub fn with_footer_inset(mut self, inset: f64) -> Self {
        self.footer_inset = inset;
        self
    }

    /// Width available to text on a canvas of `canvas_width`
    pub fn content_width(&self, canvas_width: f64) -> f64 {
        (canvas_width - 2.0 * self.padding_x).max(0.0)
    }

    /// Height of the feature row
    pub fn features_height(&self) -> f64 {
        self.features_font_size + self.pill_padding
    }
}
