//! Open Graph and Twitter Card meta tags for a generated image

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{DocumentConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Inputs for [`generate_meta_tags`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagsConfig {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical page URL, also the base for a relative image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl MetaTagsConfig {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            ..Self::default()
        }
    }

    /// Metadata for a card document; the image URL defaults to `og-image.png`
    pub fn from_document(config: &DocumentConfig) -> Self {
        Self {
            title: config.name.clone(),
            description: non_empty(&config.description)
                .or_else(|| config.tagline())
                .map(str::to_string),
            url: non_empty(&config.url).map(str::to_string),
            image_url: non_empty(&config.image_url)
                .unwrap_or("og-image.png")
                .to_string(),
            image_width: Some(config.width()),
            image_height: Some(config.height()),
            site_name: None,
            locale: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_width = Some(width);
        self.image_height = Some(height);
        self
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// A single `<meta>` element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaTag {
    pub tag: String,
    /// Attributes in output order
    pub attributes: Vec<(String, String)>,
}

impl MetaTag {
    fn property(property: &str, content: impl Into<String>) -> Self {
        Self::meta("property", property, content.into())
    }

    fn name(name: &str, content: impl Into<String>) -> Self {
        Self::meta("name", name, content.into())
    }

    fn meta(key: &str, value: &str, content: String) -> Self {
        Self {
            tag: "meta".to_string(),
            attributes: vec![
                (key.to_string(), value.to_string()),
                ("content".to_string(), content),
            ],
        }
    }

    /// Value of the attribute `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Serialize as a self-closing HTML element
    pub fn to_html(&self) -> String {
        let attrs = self
            .attributes
            .iter()
            .map(|(k, v)| format!(r#"{}="{}""#, k, escape_attribute(v)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("<{} {}/>", self.tag, attrs)
    }
}

/// Generated tags and their HTML form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaTagsResult {
    pub html: String,
    pub tags: Vec<MetaTag>,
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Resolve a relative image URL against the page URL
///
/// Absolute `http(s)` URLs and URLs without a base are returned unchanged. The
/// base is treated as a directory, so `/og.png` against `https://a.dev/docs`
/// becomes `https://a.dev/docs/og.png`.
pub fn resolve_url(image_url: &str, base_url: Option<&str>) -> String {
    let Some(base_url) = base_url else {
        return image_url.to_string();
    };
    if image_url.starts_with("http://") || image_url.starts_with("https://") {
        return image_url.to_string();
    }

    let base = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };
    let relative = image_url.strip_prefix('/').unwrap_or(image_url);

    match Url::parse(&base).and_then(|base| base.join(relative)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::warn!("cannot resolve '{}' against '{}': {}", image_url, base_url, e);
            image_url.to_string()
        }
    }
}

/// Build Open Graph and Twitter Card tags
pub fn generate_meta_tags(config: &MetaTagsConfig) -> MetaTagsResult {
    let url = non_empty(&config.url);
    let description = non_empty(&config.description);
    let image_url = resolve_url(&config.image_url, url);
    let width = config.image_width.unwrap_or(DEFAULT_WIDTH);
    let height = config.image_height.unwrap_or(DEFAULT_HEIGHT);

    let mut tags = vec![
        MetaTag::property("og:type", "website"),
        MetaTag::property("og:title", config.title.as_str()),
    ];
    if let Some(description) = description {
        tags.push(MetaTag::property("og:description", description));
    }
    if let Some(url) = url {
        tags.push(MetaTag::property("og:url", url));
    }
    tags.push(MetaTag::property("og:image", image_url.as_str()));
    tags.push(MetaTag::property("og:image:width", width.to_string()));
    tags.push(MetaTag::property("og:image:height", height.to_string()));
    tags.push(MetaTag::property("og:image:type", "image/png"));
    if let Some(site_name) = non_empty(&config.site_name) {
        tags.push(MetaTag::property("og:site_name", site_name));
    }
    if let Some(locale) = non_empty(&config.locale) {
        tags.push(MetaTag::property("og:locale", locale));
    }

    tags.push(MetaTag::name("twitter:card", "summary_large_image"));
    tags.push(MetaTag::name("twitter:title", config.title.as_str()));
    if let Some(description) = description {
        tags.push(MetaTag::name("twitter:description", description));
    }
    tags.push(MetaTag::name("twitter:image", image_url));

    let html = tags
        .iter()
        .map(MetaTag::to_html)
        .collect::<Vec<_>>()
        .join("\n");

    MetaTagsResult { html, tags }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
