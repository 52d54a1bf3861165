//! Crate-level error type for the full generation pipeline

use thiserror::Error;

use crate::config::ConfigError;
use crate::font::FontError;
use crate::logo::LogoError;
use crate::preset::PresetError;
use crate::raster::{EncodeError, RasterError};

/// Errors that can occur while generating a card image
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Logo(#[from] LogoError),

    #[error("rasterization failed: {0}")]
    Raster(#[from] RasterError),

    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
