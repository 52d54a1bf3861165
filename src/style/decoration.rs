//! Decoration settings: scanlines, corner brackets and radial glow
//!
//! Each decoration is configured with a tri-state value that accepts `false`,
//! `true` or a partial options object in config files.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A decoration toggle with optional partial options
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration<T> {
    /// Explicitly disabled
    Off,
    /// Enabled with the decoration's documented defaults
    OnDefault,
    /// Enabled with options merged over the decoration's documented defaults
    OnWithOptions(T),
}

/// Partial options that can be merged over a fully-populated default
pub trait DecorationOptions {
    /// Concrete options once every field is known
    type Resolved: Default;

    /// Fill in every unset field from `defaults`
    fn merge_over(&self, defaults: Self::Resolved) -> Self::Resolved;
}

impl<T: DecorationOptions> Decoration<T> {
    /// Resolve against the hardcoded defaults; `None` means the decoration is off
    pub fn resolve(&self) -> Option<T::Resolved> {
        match self {
            Decoration::Off => None,
            Decoration::OnDefault => Some(T::Resolved::default()),
            Decoration::OnWithOptions(options) => Some(options.merge_over(T::Resolved::default())),
        }
    }
}

impl<T> Decoration<T> {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Decoration::Off)
    }
}

impl<T> From<bool> for Decoration<T> {
    fn from(enabled: bool) -> Self {
        if enabled {
            Decoration::OnDefault
        } else {
            Decoration::Off
        }
    }
}

impl From<ScanlineOptions> for Decoration<ScanlineOptions> {
    fn from(options: ScanlineOptions) -> Self {
        Decoration::OnWithOptions(options)
    }
}

impl From<CornerBracketOptions> for Decoration<CornerBracketOptions> {
    fn from(options: CornerBracketOptions) -> Self {
        Decoration::OnWithOptions(options)
    }
}

impl From<RadialGlowOptions> for Decoration<RadialGlowOptions> {
    fn from(options: RadialGlowOptions) -> Self {
        Decoration::OnWithOptions(options)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecorationRepr<T> {
    Toggle(bool),
    Options(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Decoration<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match DecorationRepr::<T>::deserialize(deserializer)? {
            DecorationRepr::Toggle(enabled) => enabled.into(),
            DecorationRepr::Options(options) => Decoration::OnWithOptions(options),
        })
    }
}

impl<T: Serialize> Serialize for Decoration<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Decoration::Off => serializer.serialize_bool(false),
            Decoration::OnDefault => serializer.serialize_bool(true),
            Decoration::OnWithOptions(options) => options.serialize(serializer),
        }
    }
}

/// Partial options for the horizontal scanline overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanlineOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Partial options for the corner bracket frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerBracketOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Partial options for the radial glow behind the content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialGlowOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Vertical center as an SVG percentage, e.g. `"35%"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cy: Option<String>,
    /// Radius as an SVG percentage, e.g. `"50%"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
}

/// Resolved scanline overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Scanlines {
    pub opacity: f64,
}

impl Default for Scanlines {
    fn default() -> Self {
        Self { opacity: 0.03 }
    }
}

/// Resolved corner brackets
#[derive(Debug, Clone, PartialEq)]
pub struct CornerBrackets {
    pub opacity: f64,
    pub stroke_width: f64,
}

impl Default for CornerBrackets {
    fn default() -> Self {
        Self {
            opacity: 0.15,
            stroke_width: 2.0,
        }
    }
}

/// Resolved radial glow
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGlow {
    pub opacity: f64,
    pub cy: String,
    pub r: String,
}

impl Default for RadialGlow {
    fn default() -> Self {
        Self {
            opacity: 0.15,
            cy: "35%".to_string(),
            r: "50%".to_string(),
        }
    }
}

impl DecorationOptions for ScanlineOptions {
    type Resolved = Scanlines;

    fn merge_over(&self, defaults: Scanlines) -> Scanlines {
        Scanlines {
            opacity: self.opacity.unwrap_or(defaults.opacity),
        }
    }
}

impl DecorationOptions for CornerBracketOptions {
    type Resolved = CornerBrackets;

    fn merge_over(&self, defaults: CornerBrackets) -> CornerBrackets {
        CornerBrackets {
            opacity: self.opacity.unwrap_or(defaults.opacity),
            stroke_width: self.stroke_width.unwrap_or(defaults.stroke_width),
        }
    }
}

impl DecorationOptions for RadialGlowOptions {
    type Resolved = RadialGlow;

    fn merge_over(&self, defaults: RadialGlow) -> RadialGlow {
        RadialGlow {
            opacity: self.opacity.unwrap_or(defaults.opacity),
            cy: self.cy.clone().unwrap_or(defaults.cy),
            r: self.r.clone().unwrap_or(defaults.r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_off() {
        let deco: Decoration<ScanlineOptions> = Decoration::Off;
        assert_eq!(deco.resolve(), None);
        assert!(!deco.is_enabled());
    }

    #[test]
    fn test_resolve_on_default() {
        let deco: Decoration<CornerBracketOptions> = Decoration::OnDefault;
        assert_eq!(deco.resolve(), Some(CornerBrackets::default()));
    }

    #[test]
    fn test_resolve_partial_options() {
        let deco = Decoration::OnWithOptions(RadialGlowOptions {
            opacity: Some(0.4),
            cy: None,
            r: Some("60%".to_string()),
        });
        assert_eq!(
            deco.resolve(),
            Some(RadialGlow {
                opacity: 0.4,
                cy: "35%".to_string(),
                r: "60%".to_string(),
            })
        );
    }

    #[test]
    fn test_deserialize_bool_and_options() {
        let off: Decoration<ScanlineOptions> = serde_json::from_str("false").unwrap();
        let on: Decoration<ScanlineOptions> = serde_json::from_str("true").unwrap();
        let with: Decoration<CornerBracketOptions> =
            serde_json::from_str(r#"{"strokeWidth": 3}"#).unwrap();

        assert_eq!(off, Decoration::Off);
        assert_eq!(on, Decoration::OnDefault);
        assert_eq!(
            with,
            Decoration::OnWithOptions(CornerBracketOptions {
                opacity: None,
                stroke_width: Some(3.0),
            })
        );
    }

    #[test]
    fn test_serialize_round_trips_through_json_shape() {
        let deco = Decoration::OnWithOptions(ScanlineOptions { opacity: Some(0.1) });
        assert_eq!(serde_json::to_string(&deco).unwrap(), r#"{"opacity":0.1}"#);
        let off: Decoration<ScanlineOptions> = Decoration::Off;
        assert_eq!(serde_json::to_string(&off).unwrap(), "false");
    }
}
