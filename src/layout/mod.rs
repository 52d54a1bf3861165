//! Layout engine for the card's content blocks
//!
//! The name block is always present; the logo, tagline and feature row are
//! stacked around it when present, and the whole stack is centered on the
//! canvas. The footer is pinned near the bottom edge independently.

pub mod config;
pub mod engine;

pub use config::LayoutConfig;
pub use engine::{compute, LayoutRequest, LayoutResult};
