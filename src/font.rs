//! Font loading for the rasterizer

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Errors that can occur when reading font files
#[derive(Error, Debug)]
pub enum FontError {
    #[error("font file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("error reading font file {}: {message}", path.display())]
    Read { path: PathBuf, message: String },
}

/// Font files and family name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    /// Regular weight font file (TTF, OTF)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Bold weight font file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold_path: Option<PathBuf>,
    /// Family name written into the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl FontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_bold_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bold_path = Some(path.into());
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Family name, `Inter` when unset
    pub fn family_of(config: Option<&FontConfig>) -> &str {
        config
            .and_then(|c| c.family.as_deref())
            .unwrap_or(DEFAULT_FONT_FAMILY)
    }
}

/// Font data handed to the rasterizer
///
/// An empty set means the rasterizer should use system fonts.
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    pub family: String,
    pub regular: Option<Vec<u8>>,
    pub bold: Option<Vec<u8>>,
}

impl FontSet {
    /// A set with no font data, resolved from system fonts
    pub fn system(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            regular: None,
            bold: None,
        }
    }

    /// All loaded font faces
    pub fn faces(&self) -> impl Iterator<Item = &[u8]> {
        self.regular.iter().chain(self.bold.iter()).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.regular.is_none() && self.bold.is_none()
    }
}

fn read_font(path: &Path) -> Result<Vec<u8>, FontError> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FontError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            FontError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })
}

/// Read the configured regular and bold font files
pub fn load_fonts(config: Option<&FontConfig>) -> Result<FontSet, FontError> {
    let family = FontConfig::family_of(config).to_string();
    let Some(config) = config else {
        return Ok(FontSet::system(family));
    };

    let regular = config.path.as_deref().map(read_font).transpose()?;
    let bold = config.bold_path.as_deref().map(read_font).transpose()?;
    log::debug!(
        "loaded fonts for '{}': regular={}, bold={}",
        family,
        regular.is_some(),
        bold.is_some()
    );

    Ok(FontSet {
        family,
        regular,
        bold,
    })
}
