//! Style model and resolution
//!
//! Decorations and colors are resolved in layers: built-in defaults, then the
//! active preset, then explicit document settings.

mod color;
mod decoration;
mod resolver;

pub use color::{ColorConfig, ColorPalette, DEFAULT_ACCENT, DEFAULT_BACKGROUND, DEFAULT_DIM, DEFAULT_TEXT};
pub use decoration::{
    CornerBracketOptions, CornerBrackets, Decoration, DecorationOptions, RadialGlow,
    RadialGlowOptions, ScanlineOptions, Scanlines,
};
pub use resolver::{
    resolve_style, ResolvedStyle, StyleConfig, DEFAULT_NAME_FONT_WEIGHT,
    DEFAULT_NAME_LETTER_SPACING,
};
