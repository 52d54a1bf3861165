//! Document configuration
//!
//! A [`DocumentConfig`] is the declarative description of one card. It can be
//! built in code with the `with_*` setters, or loaded from a JSON or TOML file
//! using the same camelCase keys in both formats.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::font::FontConfig;
use crate::style::{ColorConfig, StyleConfig};

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 630;

/// Errors that can occur when loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format for {} (expected .json or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Load a `.json` or `.toml` file into `T`, picking the format by extension
pub(crate) fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if !matches!(ext.as_deref(), Some("json") | Some("toml")) {
        return Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match ext.as_deref() {
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Ok(toml::from_str(&content)?),
    }
}

/// Logo shown above the name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LogoConfig {
    /// Literal text rendered in the logo slot
    Text { text: String },

    /// Inner SVG markup (no `<svg>` wrapper) with its viewBox
    #[serde(rename_all = "camelCase")]
    SvgInline {
        content: String,
        view_box: String,
        /// Intrinsic size, used to keep the aspect ratio; square when unset
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
    },

    /// SVG file, optionally narrowed to the element with a given id
    ///
    /// Must be turned into [`LogoConfig::SvgInline`] with
    /// [`crate::logo::resolve_logo`] before the document is assembled.
    SvgFile {
        path: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selector: Option<String>,
    },
}

impl LogoConfig {
    pub fn text(text: impl Into<String>) -> Self {
        LogoConfig::Text { text: text.into() }
    }

    pub fn svg_inline(content: impl Into<String>, view_box: impl Into<String>) -> Self {
        LogoConfig::SvgInline {
            content: content.into(),
            view_box: view_box.into(),
            width: None,
            height: None,
        }
    }

    pub fn svg_file(path: impl Into<PathBuf>, selector: Option<String>) -> Self {
        LogoConfig::SvgFile {
            path: path.into(),
            selector,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, LogoConfig::SvgFile { .. })
    }
}

/// Declarative description of a card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    /// Display name (required)
    pub name: String,
    /// Short line shown below the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Longer description, used for metadata only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Feature keywords shown as one row
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Footer text, typically a URL or version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Canonical page URL, used for metadata only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Where the generated image will be hosted, used for metadata only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl DocumentConfig {
    /// Create a configuration with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_logo(mut self, logo: LogoConfig) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn with_colors(mut self, colors: ColorConfig) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_font(mut self, font: FontConfig) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Canvas width, defaulting to 1200
    pub fn width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }

    /// Canvas height, defaulting to 630
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    /// Tagline, if present and non-empty
    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref().filter(|t| !t.is_empty())
    }

    /// Footer, if present and non-empty
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref().filter(|t| !t.is_empty())
    }

    /// Font family for text nodes
    pub fn font_family(&self) -> &str {
        FontConfig::family_of(self.font.as_ref())
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a `.json` or `.toml` file
    ///
    /// Relative logo and font paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = load_file(path)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        fn rebase(base: &Path, path: &mut PathBuf) {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }

        if let Some(LogoConfig::SvgFile { path, .. }) = &mut self.logo {
            rebase(base, path);
        }
        if let Some(font) = &mut self.font {
            for path in [&mut font.path, &mut font.bold_path].into_iter().flatten() {
                rebase(base, path);
            }
        }
    }
}
