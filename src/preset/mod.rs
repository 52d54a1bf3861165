//! Style presets
//!
//! A preset bundles decoration settings and optional color overrides under a
//! name. Presets are registered in a [`PresetRegistry`] and referenced from a
//! document's style either by name or inline.
//!
//! # Example
//!
//! ```rust
//! use og_card::preset::{PresetRegistry, StylePreset};
//! use og_card::style::{ColorConfig, ScanlineOptions};
//!
//! let registry = PresetRegistry::new();
//! registry
//!     .register(
//!         StylePreset::new("neon")
//!             .with_colors(ColorConfig::new().with_accent("#ff00ff"))
//!             .with_scanlines(ScanlineOptions { opacity: Some(0.04) }),
//!     )
//!     .unwrap();
//!
//! assert!(registry.contains("neon"));
//! ```

mod builtin;
mod registry;

pub use registry::{PresetError, PresetRef, PresetRegistry, StylePreset};
