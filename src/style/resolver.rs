//! Style resolution - layers explicit style settings over a preset

use serde::{Deserialize, Serialize};

use crate::preset::{PresetError, PresetRef, PresetRegistry};

use super::{
    ColorConfig, CornerBracketOptions, CornerBrackets, Decoration, DecorationOptions, RadialGlow,
    RadialGlowOptions, ScanlineOptions, Scanlines,
};

pub const DEFAULT_NAME_FONT_WEIGHT: u16 = 700;
pub const DEFAULT_NAME_LETTER_SPACING: f64 = 2.0;

/// Per-document style settings
///
/// Any decoration set here, including an explicit `false`, replaces the
/// preset's setting for that decoration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanlines: Option<Decoration<ScanlineOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_brackets: Option<Decoration<CornerBracketOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radial_glow: Option<Decoration<RadialGlowOptions>>,
    /// Base preset, by name or inline; `minimal` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<PresetRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_letter_spacing: Option<f64>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(mut self, preset: impl Into<PresetRef>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_scanlines(mut self, setting: impl Into<Decoration<ScanlineOptions>>) -> Self {
        self.scanlines = Some(setting.into());
        self
    }

    pub fn with_corner_brackets(
        mut self,
        setting: impl Into<Decoration<CornerBracketOptions>>,
    ) -> Self {
        self.corner_brackets = Some(setting.into());
        self
    }

    pub fn with_radial_glow(mut self, setting: impl Into<Decoration<RadialGlowOptions>>) -> Self {
        self.radial_glow = Some(setting.into());
        self
    }

    pub fn with_name_font_weight(mut self, weight: u16) -> Self {
        self.name_font_weight = Some(weight);
        self
    }

    pub fn with_name_letter_spacing(mut self, spacing: f64) -> Self {
        self.name_letter_spacing = Some(spacing);
        self
    }

    pub fn name_font_weight(&self) -> u16 {
        self.name_font_weight.unwrap_or(DEFAULT_NAME_FONT_WEIGHT)
    }

    pub fn name_letter_spacing(&self) -> f64 {
        self.name_letter_spacing.unwrap_or(DEFAULT_NAME_LETTER_SPACING)
    }
}

/// Concrete decorations plus the preset's partial colors
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub scanlines: Option<Scanlines>,
    pub corner_brackets: Option<CornerBrackets>,
    pub radial_glow: Option<RadialGlow>,
    /// The preset's colors, not yet layered over defaults or document colors
    pub colors: ColorConfig,
}

/// Pick the explicit setting if present, else the preset's, and resolve it
///
/// Options are always merged over the decoration's hardcoded defaults, never
/// over the preset's options. A decoration neither side sets is off.
fn layer<T: DecorationOptions>(
    preset: Option<&Decoration<T>>,
    explicit: Option<&Decoration<T>>,
) -> Option<T::Resolved> {
    explicit.or(preset).and_then(Decoration::resolve)
}

/// Resolve a document's style against the registry
pub fn resolve_style(
    style: Option<&StyleConfig>,
    registry: &PresetRegistry,
) -> Result<ResolvedStyle, PresetError> {
    let preset = registry.resolve(style.and_then(|s| s.preset.as_ref()))?;
    log::debug!("resolving style with preset '{}'", preset.name);

    Ok(ResolvedStyle {
        scanlines: layer(
            preset.scanlines.as_ref(),
            style.and_then(|s| s.scanlines.as_ref()),
        ),
        corner_brackets: layer(
            preset.corner_brackets.as_ref(),
            style.and_then(|s| s.corner_brackets.as_ref()),
        ),
        radial_glow: layer(
            preset.radial_glow.as_ref(),
            style.and_then(|s| s.radial_glow.as_ref()),
        ),
        colors: preset.colors.clone().unwrap_or_default(),
    })
}
