//! Built-in presets seeded into every new registry

use crate::style::{CornerBracketOptions, Decoration, RadialGlowOptions, ScanlineOptions};

use super::StylePreset;

fn default_glow() -> RadialGlowOptions {
    RadialGlowOptions {
        opacity: Some(0.15),
        cy: Some("35%".to_string()),
        r: Some("50%".to_string()),
    }
}

pub(super) fn minimal() -> StylePreset {
    StylePreset::new("minimal")
        .with_description("Clean background with subtle radial glow")
        .with_scanlines(Decoration::Off)
        .with_corner_brackets(Decoration::Off)
        .with_radial_glow(default_glow())
}

pub(super) fn terminal() -> StylePreset {
    StylePreset::new("terminal")
        .with_description("Retro terminal with scanlines, corner brackets, and glow")
        .with_scanlines(ScanlineOptions {
            opacity: Some(0.03),
        })
        .with_corner_brackets(CornerBracketOptions {
            opacity: Some(0.15),
            stroke_width: Some(2.0),
        })
        .with_radial_glow(default_glow())
}

pub(super) fn all() -> Vec<StylePreset> {
    vec![minimal(), terminal()]
}
