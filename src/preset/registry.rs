//! Preset registry for storing and resolving style presets

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{self, ConfigError};
use crate::style::{ColorConfig, CornerBracketOptions, Decoration, RadialGlowOptions, ScanlineOptions};

use super::builtin;

/// Errors that can occur during preset operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresetError {
    /// A preset with this name is already registered
    #[error("preset \"{name}\" is already registered, use a different name")]
    Duplicate { name: String },

    /// A preset name that is not registered
    #[error("unknown preset \"{name}\" (available presets: {})", available.join(", "))]
    Unknown { name: String, available: Vec<String> },
}

/// A named bundle of decoration toggles and color overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    /// Unique name used for registry lookup
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Colors applied over the built-in defaults when this preset is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanlines: Option<Decoration<ScanlineOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_brackets: Option<Decoration<CornerBracketOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radial_glow: Option<Decoration<RadialGlowOptions>>,
}

impl StylePreset {
    /// Create an empty preset: no colors, every decoration unset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            colors: None,
            scanlines: None,
            corner_brackets: None,
            radial_glow: None,
        }
    }

    /// Clean background with a subtle radial glow
    pub fn minimal() -> Self {
        builtin::minimal()
    }

    /// Retro terminal look with scanlines, corner brackets and glow
    pub fn terminal() -> Self {
        builtin::terminal()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_colors(mut self, colors: ColorConfig) -> Self {
        self.colors = Some(colors);
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

    /// Names of the decorations this preset turns on
    pub fn enabled_decorations(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.scanlines.as_ref().is_some_and(Decoration::is_enabled) {
            names.push("scanlines");
        }
        if self.corner_brackets.as_ref().is_some_and(Decoration::is_enabled) {
            names.push("corner brackets");
        }
        if self.radial_glow.as_ref().is_some_and(Decoration::is_enabled) {
            names.push("radial glow");
        }
        names
    }

    /// Load a preset from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a preset from a `.toml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        config::load_file(path)
    }
}

/// A reference to a preset: a registered name or an inline preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresetRef {
    Named(String),
    Inline(Box<StylePreset>),
}

impl From<&str> for PresetRef {
    fn from(name: &str) -> Self {
        PresetRef::Named(name.to_string())
    }
}

impl From<String> for PresetRef {
    fn from(name: String) -> Self {
        PresetRef::Named(name)
    }
}

impl From<StylePreset> for PresetRef {
    fn from(preset: StylePreset) -> Self {
        PresetRef::Inline(Box::new(preset))
    }
}

static GLOBAL: Lazy<PresetRegistry> = Lazy::new(PresetRegistry::new);

/// Insertion-ordered registry of presets
///
/// Registration takes `&self`; writers are serialized so the uniqueness check
/// and the insert happen atomically.
#[derive(Debug)]
pub struct PresetRegistry {
    presets: RwLock<Vec<Arc<StylePreset>>>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetRegistry {
    /// Create a registry seeded with the built-in presets
    pub fn new() -> Self {
        let presets = builtin::all().into_iter().map(Arc::new).collect();
        Self {
            presets: RwLock::new(presets),
        }
    }

    /// Create a registry with no presets at all
    pub fn empty() -> Self {
        Self {
            presets: RwLock::new(Vec::new()),
        }
    }

    /// The process-wide default registry
    pub fn global() -> &'static PresetRegistry {
        &GLOBAL
    }

    /// Register a preset under its name
    pub fn register(&self, preset: StylePreset) -> Result<(), PresetError> {
        let mut presets = self.presets.write().unwrap_or_else(PoisonError::into_inner);
        if presets.iter().any(|p| p.name == preset.name) {
            return Err(PresetError::Duplicate { name: preset.name });
        }
        log::debug!("registered preset '{}'", preset.name);
        presets.push(Arc::new(preset));
        Ok(())
    }

    /// Look up a preset by name
    pub fn get(&self, name: &str) -> Option<Arc<StylePreset>> {
        self.read().iter().find(|p| p.name == name).cloned()
    }

    /// Check if a preset exists
    pub fn contains(&self, name: &str) -> bool {
        self.read().iter().any(|p| p.name == name)
    }

    /// All presets, built-ins first
    pub fn list(&self) -> Vec<Arc<StylePreset>> {
        self.read().clone()
    }

    /// All preset names, in registration order
    pub fn names(&self) -> Vec<String> {
        self.read().iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Resolve an optional preset reference
    ///
    /// No reference yields the `minimal` built-in. Inline presets are returned
    /// as-is without touching the registry.
    pub fn resolve(&self, reference: Option<&PresetRef>) -> Result<Arc<StylePreset>, PresetError> {
        match reference {
            None => Ok(Arc::new(StylePreset::minimal())),
            Some(PresetRef::Named(name)) => self.get(name).ok_or_else(|| PresetError::Unknown {
                name: name.clone(),
                available: self.names(),
            }),
            Some(PresetRef::Inline(preset)) => Ok(Arc::new(preset.as_ref().clone())),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<StylePreset>>> {
        self.presets.read().unwrap_or_else(PoisonError::into_inner)
    }
}
