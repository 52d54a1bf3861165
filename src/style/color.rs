//! Color slots for the card
//!
//! Colors are opaque strings; no syntax validation is performed. Layers are
//! applied per slot, so a document can override only `accent` while keeping a
//! preset's `background`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKGROUND: &str = "#0a0a0a";
pub const DEFAULT_ACCENT: &str = "#22d3ee";
pub const DEFAULT_DIM: &str = "#a1a1aa";
pub const DEFAULT_TEXT: &str = "#fafafa";

/// A partial color bundle, as supplied by presets and documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorConfig {
    /// Background color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Accent color for the name and the glow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Secondary text color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<String>,
    /// Primary text color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ColorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_accent(mut self, color: impl Into<String>) -> Self {
        self.accent = Some(color.into());
        self
    }

    pub fn with_dim(mut self, color: impl Into<String>) -> Self {
        self.dim = Some(color.into());
        self
    }

    pub fn with_text(mut self, color: impl Into<String>) -> Self {
        self.text = Some(color.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.accent.is_none() && self.dim.is_none() && self.text.is_none()
    }

    /// Set slots as `(name, value)` pairs, in slot order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("background", &self.background),
            ("accent", &self.accent),
            ("dim", &self.dim),
            ("text", &self.text),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

/// A fully-resolved color bundle
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    pub background: String,
    pub accent: String,
    pub dim: String,
    pub text: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
            dim: DEFAULT_DIM.to_string(),
            text: DEFAULT_TEXT.to_string(),
        }
    }
}

impl ColorPalette {
    /// Overwrite the slots that `layer` specifies
    pub fn apply(&mut self, layer: &ColorConfig) {
        let slots = [
            (&mut self.background, &layer.background),
            (&mut self.accent, &layer.accent),
            (&mut self.dim, &layer.dim),
            (&mut self.text, &layer.text),
        ];
        for (slot, value) in slots {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
    }

    /// Defaults, then each layer in order
    pub fn layered<'a>(layers: impl IntoIterator<Item = &'a ColorConfig>) -> Self {
        let mut palette = Self::default();
        for layer in layers {
            palette.apply(layer);
        }
        palette
    }
}
