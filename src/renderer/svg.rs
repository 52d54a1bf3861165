//! SVG document assembly for a card

use std::fmt;

use crate::config::{DocumentConfig, LogoConfig, DEFAULT_WIDTH};
use crate::layout::{self, LayoutConfig, LayoutRequest, LayoutResult};
use crate::preset::{PresetError, PresetRegistry};
use crate::style::{
    resolve_style, ColorPalette, ResolvedStyle, StyleConfig, DEFAULT_NAME_FONT_WEIGHT,
    DEFAULT_NAME_LETTER_SPACING,
};

use super::text::{escape_markup, max_chars_for_width, truncate};
use super::{RenderConfig, SvgConfig};

/// Separator placed between feature keywords
pub const FEATURE_SEPARATOR: &str = " | ";

const BRACKET_MARGIN: f64 = 24.0;
const BRACKET_ARM: f64 = 40.0;

/// Attribute list, escaped as it is built
#[derive(Debug, Clone, Default)]
pub struct Attrs(String);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name="value"`
    pub fn set(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.0.push_str(&format!(
            r#" {}="{}""#,
            name,
            escape_markup(&value.to_string())
        ));
        self
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    lines: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            lines: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn push(&mut self, line: String) {
        let line = format!("{}{}", self.indent_str(), line);
        self.lines.push(line);
    }

    /// Open an element; children are indented until [`Self::end_element`]
    pub fn start_element(&mut self, tag: &str, attrs: &Attrs) {
        self.push(format!("<{}{}>", tag, attrs));
        self.indent += 1;
    }

    /// Close an element opened with [`Self::start_element`]
    pub fn end_element(&mut self, tag: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.push(format!("</{}>", tag));
    }

    /// Add a self-closing element
    pub fn add_empty(&mut self, tag: &str, attrs: &Attrs) {
        self.push(format!("<{}{}/>", tag, attrs));
    }

    /// Add a text element; the content is escaped
    pub fn add_text(&mut self, text: &str, attrs: &Attrs) {
        self.push(format!("<text{}>{}</text>", attrs, escape_markup(text)));
    }

    /// Add a nested `<svg>` wrapping markup that is embedded as-is
    pub fn add_fragment(&mut self, attrs: &Attrs, content: &str) {
        self.push(format!("<svg{}>{}</svg>", attrs, content));
    }

    /// Build the final SVG string
    pub fn build(self, width: u32, height: u32) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            width, height, width, height
        ));
        svg.push_str(nl);

        for line in &self.lines {
            svg.push_str(line);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Build the card document with default render settings
///
/// Fails only when the style references a preset that is not registered.
pub fn build_svg(config: &DocumentConfig, registry: &PresetRegistry) -> Result<String, PresetError> {
    build_svg_with_config(config, registry, &RenderConfig::default())
}

/// Build the card document
///
/// File-based logos must be resolved with [`crate::logo::resolve_logo`]
/// first; one that reaches this point is skipped.
pub fn build_svg_with_config(
    config: &DocumentConfig,
    registry: &PresetRegistry,
    render: &RenderConfig,
) -> Result<String, PresetError> {
    let width = config.width();
    let height = config.height();
    let canvas_w = f64::from(width);
    let canvas_h = f64::from(height);

    let style = resolve_style(config.style.as_ref(), registry)?;
    let colors = ColorPalette::layered([&style.colors].into_iter().chain(config.colors.as_ref()));
    let font_family = config.font_family();
    let layout_config = &render.layout;

    let logo = match &config.logo {
        Some(logo) if logo.is_file() => {
            log::warn!("file logo was not resolved before assembly, skipping it");
            None
        }
        other => other.as_ref(),
    };
    let tagline = config.tagline();
    let footer = config.footer();

    let request = LayoutRequest::new(canvas_h)
        .with_logo(logo.is_some())
        .with_tagline(tagline.is_some())
        .with_features(!config.features.is_empty())
        .with_footer(footer.is_some());
    let positions = layout::compute(&request, layout_config);

    let content_width = layout_config.content_width(canvas_w);
    let fallback_width = layout_config.content_width(f64::from(DEFAULT_WIDTH));
    // Canvases too narrow for a single glyph use the default card's budget
    let budget = |font_size: f64| {
        let ratio = render.char_width_ratio;
        match max_chars_for_width(content_width, font_size, ratio) {
            0 => max_chars_for_width(fallback_width, font_size, ratio).max(1),
            chars => chars,
        }
    };

    let card = Card {
        center_x: canvas_w / 2.0,
        content_width,
        font_family,
        colors: &colors,
        layout: layout_config,
        positions: &positions,
    };

    let mut builder = SvgBuilder::new(render.svg.clone());

    add_defs(&mut builder, &style, &colors);
    add_background(&mut builder, &style, &colors, width, height);
    add_corner_brackets(&mut builder, &style, &colors, canvas_w, canvas_h);

    if let Some(logo) = logo {
        card.add_logo(&mut builder, logo);
    }

    card.add_name(
        &mut builder,
        &truncate(&config.name, budget(layout_config.name_font_size)),
        config.style.as_ref(),
    );

    if let Some(tagline) = tagline {
        let text = truncate(tagline, budget(layout_config.tagline_font_size));
        builder.add_text(
            &text,
            &card
                .text_attrs(positions.tagline_y, layout_config.tagline_font_size)
                .set("fill", &colors.dim)
                .set("text-anchor", "middle"),
        );
    }

    if !config.features.is_empty() {
        let text = config.features.join(FEATURE_SEPARATOR);
        builder.add_text(
            &text,
            &card
                .text_attrs(positions.features_y, layout_config.features_font_size)
                .set("fill", &colors.dim)
                .set("text-anchor", "middle")
                .set("letter-spacing", 0.5),
        );
    }

    if let Some(footer) = footer {
        let text = truncate(footer, budget(layout_config.footer_font_size));
        builder.add_text(
            &text,
            &card
                .text_attrs(positions.footer_y, layout_config.footer_font_size)
                .set("fill", &colors.dim)
                .set("text-anchor", "middle")
                .set("opacity", 0.5),
        );
    }

    log::debug!("assembled {}x{} card for '{}'", width, height, config.name);
    Ok(builder.build(width, height))
}

/// Values shared by the content blocks
struct Card<'a> {
    center_x: f64,
    content_width: f64,
    font_family: &'a str,
    colors: &'a ColorPalette,
    layout: &'a LayoutConfig,
    positions: &'a LayoutResult,
}

impl Card<'_> {
    fn text_attrs(&self, y: f64, font_size: f64) -> Attrs {
        Attrs::new()
            .set("x", self.center_x)
            .set("y", y)
            .set("font-family", self.font_family)
            .set("font-size", font_size)
    }

    fn add_logo(&self, builder: &mut SvgBuilder, logo: &LogoConfig) {
        let logo_y = self.positions.logo_y;
        let logo_h = self.positions.logo_height;

        match logo {
            LogoConfig::Text { text } => {
                builder.add_text(
                    text,
                    &self
                        .text_attrs(logo_y + logo_h * 0.7, self.layout.text_logo_font_size)
                        .set("font-weight", 700)
                        .set("fill", &self.colors.text)
                        .set("text-anchor", "middle"),
                );
            }
            LogoConfig::SvgInline {
                content,
                view_box,
                width,
                height,
            } => {
                let logo_w = match (width, height) {
                    (Some(w), Some(h)) if *w > 0.0 && *h > 0.0 => {
                        (logo_h * w / h).min(self.content_width.max(logo_h))
                    }
                    _ => logo_h,
                };
                builder.add_fragment(
                    &Attrs::new()
                        .set("x", self.center_x - logo_w / 2.0)
                        .set("y", logo_y)
                        .set("width", logo_w)
                        .set("height", logo_h)
                        .set("viewBox", view_box),
                    content,
                );
            }
            LogoConfig::SvgFile { .. } => {}
        }
    }

    fn add_name(&self, builder: &mut SvgBuilder, name: &str, style: Option<&StyleConfig>) {
        let weight = style.map_or(DEFAULT_NAME_FONT_WEIGHT, StyleConfig::name_font_weight);
        let spacing = style.map_or(DEFAULT_NAME_LETTER_SPACING, StyleConfig::name_letter_spacing);
        builder.add_text(
            name,
            &self
                .text_attrs(self.positions.name_y, self.layout.name_font_size)
                .set("font-weight", weight)
                .set("fill", &self.colors.accent)
                .set("text-anchor", "middle")
                .set("letter-spacing", spacing),
        );
    }
}

fn add_defs(builder: &mut SvgBuilder, style: &ResolvedStyle, colors: &ColorPalette) {
    if style.radial_glow.is_none() && style.scanlines.is_none() {
        return;
    }

    builder.start_element("defs", &Attrs::new());

    if let Some(glow) = &style.radial_glow {
        builder.start_element(
            "radialGradient",
            &Attrs::new()
                .set("id", "glow")
                .set("cx", "50%")
                .set("cy", &glow.cy)
                .set("r", &glow.r),
        );
        builder.add_empty(
            "stop",
            &Attrs::new()
                .set("offset", "0%")
                .set("stop-color", &colors.accent)
                .set("stop-opacity", glow.opacity),
        );
        builder.add_empty(
            "stop",
            &Attrs::new()
                .set("offset", "100%")
                .set("stop-color", &colors.accent)
                .set("stop-opacity", 0),
        );
        builder.end_element("radialGradient");
    }

    if let Some(scanlines) = &style.scanlines {
        builder.start_element(
            "pattern",
            &Attrs::new()
                .set("id", "scanlines")
                .set("width", 4)
                .set("height", 4)
                .set("patternUnits", "userSpaceOnUse"),
        );
        builder.add_empty(
            "rect",
            &Attrs::new()
                .set("width", 4)
                .set("height", 2)
                .set("fill", &colors.text)
                .set("opacity", scanlines.opacity),
        );
        builder.end_element("pattern");
    }

    builder.end_element("defs");
}

fn add_background(
    builder: &mut SvgBuilder,
    style: &ResolvedStyle,
    colors: &ColorPalette,
    width: u32,
    height: u32,
) {
    let canvas = || Attrs::new().set("width", width).set("height", height);

    builder.add_empty("rect", &canvas().set("fill", &colors.background));
    if style.radial_glow.is_some() {
        builder.add_empty("rect", &canvas().set("fill", "url(#glow)"));
    }
    if style.scanlines.is_some() {
        builder.add_empty("rect", &canvas().set("fill", "url(#scanlines)"));
    }
}

fn add_corner_brackets(
    builder: &mut SvgBuilder,
    style: &ResolvedStyle,
    colors: &ColorPalette,
    width: f64,
    height: f64,
) {
    let Some(brackets) = &style.corner_brackets else {
        return;
    };

    let m = BRACKET_MARGIN;
    let len = BRACKET_ARM;
    let corners = [
        [(m + len, m), (m, m), (m, m + len)],
        [(width - m - len, m), (width - m, m), (width - m, m + len)],
        [(m + len, height - m), (m, height - m), (m, height - m - len)],
        [
            (width - m - len, height - m),
            (width - m, height - m),
            (width - m, height - m - len),
        ],
    ];

    builder.start_element(
        "g",
        &Attrs::new()
            .set("opacity", brackets.opacity)
            .set("stroke", &colors.dim)
            .set("stroke-width", brackets.stroke_width)
            .set("fill", "none"),
    );
    for corner in corners {
        let points = corner
            .iter()
            .map(|(x, y)| format!("{},{}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        builder.add_empty("polyline", &Attrs::new().set("points", points));
    }
    builder.end_element("g");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{PresetRef, StylePreset};
    use crate::style::{ColorConfig, CornerBracketOptions, RadialGlowOptions};

    fn build(config: &DocumentConfig) -> String {
        build_svg(config, &PresetRegistry::new()).expect("Should build")
    }

    fn text_nodes(svg: &str) -> usize {
        svg.matches("<text").count()
    }

    #[test]
    fn test_attrs_escape_values() {
        let attrs = Attrs::new().set("x", 12.5).set("fill", r#"a"b&c"#);
        insta::assert_snapshot!(attrs.to_string().trim_start(), @r#"x="12.5" fill="a&quot;b&amp;c""#);
    }

    #[test]
    fn test_builder_compact_output() {
        let mut builder = SvgBuilder::new(SvgConfig::new().with_pretty_print(false));
        builder.start_element("g", &Attrs::new().set("opacity", 0.5));
        builder.add_empty("rect", &Attrs::new().set("width", 4));
        builder.end_element("g");
        insta::assert_snapshot!(
            builder.build(10, 20),
            @r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20" viewBox="0 0 10 20"><g opacity="0.5"><rect width="4"/></g></svg>"#
        );
    }

    #[test]
    fn test_header_uses_canvas_size() {
        let svg = build(&DocumentConfig::new("Test").with_size(800, 400));
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="400" viewBox="0 0 800 400">"#
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_standalone_adds_declaration() {
        let config = RenderConfig::new().with_svg(SvgConfig::new().with_standalone(true));
        let svg =
            build_svg_with_config(&DocumentConfig::new("Test"), &PresetRegistry::new(), &config)
                .unwrap();
        assert!(svg.starts_with("<?xml"));
    }

    #[test]
    fn test_minimal_preset_has_glow_only() {
        let svg = build(&DocumentConfig::new("Test"));
        assert!(svg.contains(r#"<radialGradient id="glow" cx="50%" cy="35%" r="50%">"#));
        assert!(svg.contains(r#"fill="url(#glow)""#));
        assert!(!svg.contains("scanlines"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_terminal_preset_emits_all_decorations() {
        let config =
            DocumentConfig::new("Test").with_style(StyleConfig::new().with_preset("terminal"));
        let svg = build(&config);
        assert!(svg.contains(r#"<pattern id="scanlines" width="4" height="4" patternUnits="userSpaceOnUse">"#));
        assert!(svg.contains(r#"fill="url(#scanlines)""#));
        assert_eq!(svg.matches("<polyline").count(), 4);
        assert!(svg.contains(r##"<g opacity="0.15" stroke="#a1a1aa" stroke-width="2" fill="none">"##));
        assert!(svg.contains(r#"points="64,24 24,24 24,64""#));
        assert!(svg.contains(r#"points="1136,606 1176,606 1176,566""#));
    }

    #[test]
    fn test_emission_order() {
        let config = DocumentConfig::new("Order")
            .with_tagline("tag")
            .with_features(["a", "b"])
            .with_footer("foot")
            .with_logo(LogoConfig::text("L"))
            .with_style(StyleConfig::new().with_preset("terminal"));
        let svg = build(&config);

        let positions: Vec<usize> = [
            "<defs>",
            "<radialGradient",
            "<pattern",
            "</defs>",
            r##"fill="#0a0a0a""##,
            "url(#glow)",
            "url(#scanlines)",
            "<polyline",
            ">L</text>",
            ">Order</text>",
            ">tag</text>",
            ">a | b</text>",
            ">foot</text>",
        ]
        .iter()
        .map(|needle| svg.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", svg);
    }

    #[test]
    fn test_no_defs_when_decorations_off() {
        let config = DocumentConfig::new("Test").with_style(StyleConfig::new().with_radial_glow(false));
        let svg = build(&config);
        assert!(!svg.contains("<defs>"));
        assert!(!svg.contains("url(#"));
    }

    #[test]
    fn test_glow_options_are_applied() {
        let config = DocumentConfig::new("Test").with_style(StyleConfig::new().with_radial_glow(
            RadialGlowOptions {
                opacity: Some(0.4),
                cy: Some("20%".to_string()),
                r: None,
            },
        ));
        let svg = build(&config);
        assert!(svg.contains(r#"cy="20%" r="50%""#));
        assert!(svg.contains(r#"stop-opacity="0.4""#));
    }

    #[test]
    fn test_name_uses_accent_and_defaults() {
        let svg = build(&DocumentConfig::new("Test"));
        assert!(svg.contains(
            r##"font-family="Inter" font-size="52" font-weight="700" fill="#22d3ee" text-anchor="middle" letter-spacing="2">Test</text>"##
        ));
    }

    #[test]
    fn test_name_weight_and_spacing_overrides() {
        let config = DocumentConfig::new("Test").with_style(
            StyleConfig::new()
                .with_name_font_weight(400)
                .with_name_letter_spacing(0.0),
        );
        let svg = build(&config);
        assert!(svg.contains(r#"font-weight="400""#));
        assert!(svg.contains(r#"letter-spacing="0""#));
    }

    #[test]
    fn test_color_layering() {
        let preset = StylePreset::new("p").with_colors(
            ColorConfig::new()
                .with_background("#1a1a2e")
                .with_accent("#e94560"),
        );
        let config = DocumentConfig::new("Test")
            .with_style(StyleConfig::new().with_preset(PresetRef::from(preset)))
            .with_colors(ColorConfig::new().with_accent("#00ff00"));
        let svg = build(&config);
        assert!(svg.contains(r##"fill="#1a1a2e""##));
        assert!(svg.contains(r##"fill="#00ff00""##));
        assert!(!svg.contains("#e94560"));
        assert!(!svg.contains(r##"fill="#0a0a0a""##));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let config = DocumentConfig::new("<script>alert('x')</script>")
            .with_tagline("Tom & Jerry")
            .with_features([r#"say "hi""#]);
        let svg = build(&config);
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;alert(&apos;x&apos;)&lt;/scri"));
        assert!(svg.contains("Tom &amp; Jerry"));
        assert!(svg.contains("say &quot;hi&quot;"));
    }

    #[test]
    fn test_color_values_are_escaped() {
        let config = DocumentConfig::new("Test")
            .with_colors(ColorConfig::new().with_accent(r#""/><script/>"#));
        let svg = build(&config);
        assert!(!svg.contains("<script/>"));
    }

    #[test]
    fn test_long_name_is_truncated() {
        let name = "x".repeat(60);
        let svg = build(&DocumentConfig::new(name));
        let expected = format!("{}\u{2026}</text>", "x".repeat(35));
        assert!(svg.contains(&expected));
    }

    #[test]
    fn test_narrow_canvas_tightens_budget() {
        let name = "y".repeat(30);
        let svg = build(&DocumentConfig::new(name).with_size(600, 315));
        // (600 - 160) / (52 * 0.55) = 15.38
        let expected = format!(">{}\u{2026}</text>", "y".repeat(14));
        assert!(svg.contains(&expected));
    }

    #[test]
    fn test_features_form_one_text_node() {
        let config = DocumentConfig::new("Test").with_features(["Servers", "Firewalls", "SSH Keys"]);
        let svg = build(&config);
        assert!(svg.contains(">Servers | Firewalls | SSH Keys</text>"));
        assert!(svg.contains(r#"letter-spacing="0.5""#));
        assert_eq!(text_nodes(&svg), 2);
    }

    #[test]
    fn test_optional_blocks_absent() {
        let svg = build(&DocumentConfig::new("Test").with_tagline("").with_footer(""));
        assert_eq!(text_nodes(&svg), 1);
        assert!(!svg.contains(r#"opacity="0.5""#));
    }

    #[test]
    fn test_footer_is_pinned_and_dimmed() {
        let svg = build(&DocumentConfig::new("Test").with_footer("example.com"));
        assert!(svg.contains(
            r##"y="590" font-family="Inter" font-size="18" fill="#a1a1aa" text-anchor="middle" opacity="0.5">example.com</text>"##
        ));
    }

    #[test]
    fn test_text_logo() {
        let svg = build(&DocumentConfig::new("Test").with_logo(LogoConfig::text("A&B")));
        assert!(svg.contains(r#"font-size="48" font-weight="700""#));
        assert!(svg.contains(">A&amp;B</text>"));
    }

    #[test]
    fn test_inline_logo_is_square_by_default() {
        let config = DocumentConfig::new("Test")
            .with_logo(LogoConfig::svg_inline(r#"<circle r="5"/>"#, "0 0 10 10"));
        let svg = build(&config);
        assert!(svg.contains(r#"<svg x="560" y="233" width="80" height="80" viewBox="0 0 10 10"><circle r="5"/></svg>"#));
    }

    #[test]
    fn test_inline_logo_keeps_aspect_ratio() {
        let config = DocumentConfig::new("Test").with_logo(LogoConfig::SvgInline {
            content: "<rect/>".to_string(),
            view_box: "0 0 200 80".to_string(),
            width: Some(200.0),
            height: Some(80.0),
        });
        let svg = build(&config);
        assert!(svg.contains(r#"x="500" y="233" width="200" height="80""#));
    }

    #[test]
    fn test_wide_logo_is_clamped_to_content_width() {
        let config = DocumentConfig::new("Test").with_logo(LogoConfig::SvgInline {
            content: "<rect/>".to_string(),
            view_box: "0 0 400 20".to_string(),
            width: Some(400.0),
            height: Some(20.0),
        });
        let svg = build(&config);
        assert!(svg.contains(
            r#"<svg x="80" y="233" width="1040" height="80" viewBox="0 0 400 20">"#
        ));
    }

    #[test]
    fn test_name_survives_narrow_canvas() {
        for width in [40, 160, 180] {
            let config = DocumentConfig::new("Pipeline").with_size(width, 100);
            let svg = build(&config);
            assert!(svg.contains(">Pipeline</text>"), "width {}: {}", width, svg);
        }

        let long = DocumentConfig::new("n".repeat(100)).with_size(40, 100);
        let svg = build(&long);
        let expected = format!(">{}\u{2026}</text>", "n".repeat(35));
        assert!(svg.contains(&expected));
    }

    #[test]
    fn test_unresolved_file_logo_is_skipped() {
        let config = DocumentConfig::new("Test").with_logo(LogoConfig::svg_file("logo.svg", None));
        let with_file = build(&config);
        let without = build(&DocumentConfig::new("Test"));
        assert_eq!(with_file, without);
    }

    #[test]
    fn test_custom_font_family() {
        let config = DocumentConfig::new("Test")
            .with_font(crate::font::FontConfig::new().with_family("JetBrains Mono"));
        let svg = build(&config);
        assert!(svg.contains(r#"font-family="JetBrains Mono""#));
        assert!(!svg.contains(r#"font-family="Inter""#));
    }

    #[test]
    fn test_unknown_preset_fails() {
        let config = DocumentConfig::new("Test").with_style(StyleConfig::new().with_preset("nope"));
        let err = build_svg(&config, &PresetRegistry::new()).unwrap_err();
        assert!(matches!(err, PresetError::Unknown { .. }));
    }

    #[test]
    fn test_bracket_options_are_applied() {
        let config = DocumentConfig::new("Test").with_style(StyleConfig::new().with_corner_brackets(
            CornerBracketOptions {
                opacity: Some(0.3),
                stroke_width: Some(1.5),
            },
        ));
        let svg = build(&config);
        assert!(svg.contains(r##"<g opacity="0.3" stroke="#a1a1aa" stroke-width="1.5" fill="none">"##));
    }
}
