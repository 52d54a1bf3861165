//! SVG document assembly
//!
//! Turns a [`crate::DocumentConfig`] into a self-contained SVG string: the
//! style is resolved against a preset registry, blocks are positioned by the
//! layout engine, and every piece of user text is truncated to its width
//! budget and escaped before it is written.

pub mod config;
pub mod svg;
pub mod text;

pub use config::{RenderConfig, SvgConfig};
pub use svg::{build_svg, build_svg_with_config, Attrs, SvgBuilder, FEATURE_SEPARATOR};
pub use text::{escape_markup, estimate_width, max_chars_for_width, truncate, DEFAULT_CHAR_WIDTH_RATIO};
