//! Text helpers for content embedded in the SVG document
//!
//! No glyph metrics are available while the document is assembled, so widths
//! are estimated with a proportional-font heuristic.

/// Average glyph width as a fraction of the font size
pub const DEFAULT_CHAR_WIDTH_RATIO: f64 = 0.55;

const ELLIPSIS: char = '\u{2026}';

/// Escape the five markup-significant characters
///
/// The ampersand is replaced first so inserted entities are never re-escaped
/// within a single call. Escaping is not idempotent: a second pass escapes the
/// ampersands introduced by the first.
pub fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Truncate text to at most `max_chars` characters, ending with an ellipsis
/// when anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Estimate the rendered width of `text`
pub fn estimate_width(text: &str, font_size: f64, char_width_ratio: f64) -> f64 {
    text.chars().count() as f64 * font_size * char_width_ratio
}

/// How many characters fit in `width` at `font_size`
///
/// Inverse of [`estimate_width`], floored so that the estimate of a string of
/// this many characters never exceeds `width`.
pub fn max_chars_for_width(width: f64, font_size: f64, char_width_ratio: f64) -> usize {
    let glyph = font_size * char_width_ratio;
    if !(glyph > 0.0) || !(width > 0.0) {
        return 0;
    }
    let chars = (width / glyph).floor();
    if chars.is_finite() {
        chars as usize
    } else {
        0
    }
}
