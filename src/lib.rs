//! og-card - Open Graph preview cards from a declarative description
//!
//! A [`DocumentConfig`] names the card and lists its optional blocks (logo,
//! tagline, features, footer), colors and decorations. [`build_svg`] turns it
//! into a self-contained SVG document; [`generate`] additionally rasterizes
//! and compresses it into a PNG.
//!
//! # Example
//!
//! ```rust
//! use og_card::{build_svg, DocumentConfig, PresetRegistry, StyleConfig};
//!
//! let config = DocumentConfig::new("hetzner-cli")
//!     .with_tagline("A modern CLI for Hetzner Cloud")
//!     .with_features(["Servers", "Firewalls"])
//!     .with_style(StyleConfig::new().with_preset("terminal"));
//!
//! let svg = build_svg(&config, &PresetRegistry::new()).unwrap();
//! assert!(svg.contains("hetzner-cli"));
//! assert!(svg.contains("Servers | Firewalls"));
//! ```

pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod logo;
pub mod meta;
pub mod preset;
pub mod raster;
pub mod renderer;
pub mod style;

pub use config::{ConfigError, DocumentConfig, LogoConfig};
pub use error::{Error, Result};
pub use font::{load_fonts, FontConfig, FontError, FontSet};
pub use layout::{LayoutConfig, LayoutRequest, LayoutResult};
pub use logo::{extract_svg_content, resolve_logo, ExtractedSvg, LogoError};
pub use meta::{generate_meta_tags, MetaTag, MetaTagsConfig, MetaTagsResult};
pub use preset::{PresetError, PresetRef, PresetRegistry, StylePreset};
pub use raster::{Bitmap, EncodeError, Encoder, RasterError, Rasterizer};
pub use renderer::{build_svg, build_svg_with_config, RenderConfig, SvgConfig};
pub use style::{ColorConfig, Decoration, ResolvedStyle, StyleConfig};

#[cfg(feature = "raster")]
pub use raster::{PngEncoder, ResvgRasterizer};

/// Output of the full pipeline
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub svg: String,
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl GenerateResult {
    /// Size of the encoded PNG in bytes
    pub fn png_size(&self) -> usize {
        self.png.len()
    }
}

/// Generate the card image with resvg and the default PNG settings
///
/// # Example
///
/// ```rust,no_run
/// use og_card::{generate, DocumentConfig, PresetRegistry};
///
/// let result = generate(&DocumentConfig::new("my-project"), &PresetRegistry::new()).unwrap();
/// std::fs::write("og-image.png", &result.png).unwrap();
/// ```
#[cfg(feature = "raster")]
pub fn generate(config: &DocumentConfig, registry: &PresetRegistry) -> Result<GenerateResult> {
    generate_with(
        config,
        registry,
        &RenderConfig::default(),
        &ResvgRasterizer::new(),
        &PngEncoder::default(),
    )
}

/// Generate the card image with the given rasterizer and encoder
///
/// A file-based logo is inlined first, then the SVG is built, fonts are
/// loaded, and the document is rasterized at its canvas width and encoded.
pub fn generate_with<R, E>(
    config: &DocumentConfig,
    registry: &PresetRegistry,
    render: &RenderConfig,
    rasterizer: &R,
    encoder: &E,
) -> Result<GenerateResult>
where
    R: Rasterizer + ?Sized,
    E: Encoder + ?Sized,
{
    let resolved;
    let config = match &config.logo {
        Some(logo) if logo.is_file() => {
            resolved = DocumentConfig {
                logo: Some(logo.resolve_file()?),
                ..config.clone()
            };
            &resolved
        }
        _ => config,
    };

    let svg = build_svg_with_config(config, registry, render)?;
    let fonts = load_fonts(config.font.as_ref())?;
    let bitmap = rasterizer.rasterize(&svg, config.width(), &fonts)?;
    let png = encoder.encode(&bitmap)?;
    log::debug!("encoded {} bytes", png.len());

    Ok(GenerateResult {
        svg,
        png,
        width: bitmap.width,
        height: bitmap.height,
    })
}
