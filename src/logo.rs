//! Extraction of logo markup from SVG files

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::LogoConfig;

const DEFAULT_VIEW_BOX: &str = "0 0 100 100";
const DEFAULT_SIZE: f64 = 100.0;

/// Errors that can occur while extracting a logo
#[derive(Error, Debug)]
pub enum LogoError {
    #[error("error reading logo file {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("invalid SVG content: {message}")]
    InvalidSvg { message: String },
}

/// Inline markup extracted from an SVG document
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSvg {
    pub content: String,
    pub view_box: String,
    pub width: f64,
    pub height: f64,
}

impl From<ExtractedSvg> for LogoConfig {
    fn from(svg: ExtractedSvg) -> Self {
        LogoConfig::SvgInline {
            content: svg.content,
            view_box: svg.view_box,
            width: Some(svg.width),
            height: Some(svg.height),
        }
    }
}

/// Read an SVG file and extract its content
pub fn extract_svg_content(path: &Path, selector: Option<&str>) -> Result<ExtractedSvg, LogoError> {
    let text = std::fs::read_to_string(path).map_err(|e| LogoError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    extract_svg_str(&text, selector)
}

/// Extract content from SVG source text
///
/// With a selector, the element whose `id` matches is returned including its
/// own tag. Otherwise, or if nothing matches, the root element's inner markup
/// is returned.
pub fn extract_svg_str(text: &str, selector: Option<&str>) -> Result<ExtractedSvg, LogoError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options).map_err(|e| {
        LogoError::InvalidSvg {
            message: e.to_string(),
        }
    })?;
    let root = doc.root_element();

    let view_box = root.attribute("viewBox").unwrap_or(DEFAULT_VIEW_BOX).to_string();
    let (width, height) = view_box_size(&view_box);

    if let Some(selector) = selector {
        let id = selector.trim_start_matches('#');
        if let Some(node) = root
            .descendants()
            .find(|n| n.is_element() && n.attribute("id") == Some(id))
        {
            return Ok(ExtractedSvg {
                content: text[node.range()].to_string(),
                view_box,
                width,
                height,
            });
        }
        log::warn!("logo selector '{}' not found, using the whole document", selector);
    }

    let content = match (root.first_child(), root.last_child()) {
        (Some(first), Some(last)) => text[first.range().start..last.range().end].trim(),
        _ => "",
    };

    Ok(ExtractedSvg {
        content: content.to_string(),
        view_box,
        width,
        height,
    })
}

/// Width and height from a viewBox, falling back to 100x100
fn view_box_size(view_box: &str) -> (f64, f64) {
    let parts: Vec<f64> = view_box
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    if parts.len() >= 4 {
        (parts[2], parts[3])
    } else {
        (DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

/// Turn a file-based logo into an inline one; other logos pass through
pub fn resolve_logo(logo: &LogoConfig) -> Result<LogoConfig, LogoError> {
    match logo {
        LogoConfig::SvgFile { path, selector } => {
            log::debug!("extracting logo from {}", path.display());
            Ok(extract_svg_content(path, selector.as_deref())?.into())
        }
        other => Ok(other.clone()),
    }
}

impl LogoConfig {
    /// Inline a file-based logo, see [`resolve_logo`]
    pub fn resolve_file(&self) -> Result<LogoConfig, LogoError> {
        resolve_logo(self)
    }
}
