//! Vertical stacking of the card's content blocks

use super::LayoutConfig;

/// Which optional blocks are present, and the canvas height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    pub has_logo: bool,
    pub has_tagline: bool,
    pub has_features: bool,
    pub has_footer: bool,
    pub canvas_height: f64,
}

impl LayoutRequest {
    /// A request with only the name block, on a canvas of `canvas_height`
    pub fn new(canvas_height: f64) -> Self {
        Self {
            has_logo: false,
            has_tagline: false,
            has_features: false,
            has_footer: false,
            canvas_height,
        }
    }

    pub fn with_logo(mut self, present: bool) -> Self {
        self.has_logo = present;
        self
    }

    pub fn with_tagline(mut self, present: bool) -> Self {
        self.has_tagline = present;
        self
    }

    pub fn with_features(mut self, present: bool) -> Self {
        self.has_features = present;
        self
    }

    pub fn with_footer(mut self, present: bool) -> Self {
        self.has_footer = present;
        self
    }
}

/// Vertical anchors for each block
///
/// `logo_y` is the top of the logo slot; the other coordinates are text
/// baselines. Coordinates of absent blocks are still computed but unused,
/// except `footer_y` which is the canvas height when there is no footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    pub logo_y: f64,
    pub logo_height: f64,
    pub name_y: f64,
    pub tagline_y: f64,
    pub features_y: f64,
    pub footer_y: f64,
}

/// Compute block positions, centering the stack and pinning the footer
pub fn compute(request: &LayoutRequest, config: &LayoutConfig) -> LayoutResult {
    let height = request.canvas_height;

    let (logo_height, logo_gap) = if request.has_logo {
        (config.logo_height, config.logo_gap)
    } else {
        (0.0, 0.0)
    };
    let name_height = config.name_font_size;
    let (tagline_gap, tagline_height) = if request.has_tagline {
        (config.tagline_gap, config.tagline_font_size)
    } else {
        (0.0, 0.0)
    };
    let (features_gap, features_height) = if request.has_features {
        (config.features_gap, config.features_height())
    } else {
        (0.0, 0.0)
    };

    let total = logo_height
        + logo_gap
        + name_height
        + tagline_gap
        + tagline_height
        + features_gap
        + features_height;

    let mut y = (height - total) / 2.0;

    let logo_y = y;
    y += logo_height + logo_gap;

    let name_y = y + config.name_font_size * config.baseline_ratio;
    y += name_height;

    let tagline_y = y + tagline_gap + config.tagline_font_size * config.baseline_ratio;
    y += tagline_gap + tagline_height;

    let features_y = y + features_gap + config.features_font_size * config.baseline_ratio;

    // The footer sits outside the centered stack.
    let footer_y = if request.has_footer {
        height - config.footer_inset
    } else {
        height
    };

    let result = LayoutResult {
        logo_y,
        logo_height,
        name_y,
        tagline_y,
        features_y,
        footer_y,
    };
    log::debug!("layout for {:?}: {:?}", request, result);
    result
}
