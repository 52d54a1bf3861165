//! Preset registry tests: TOML presets, uniqueness and concurrent registration

use std::sync::Arc;
use std::thread;

use og_card::style::{resolve_style, CornerBrackets, Scanlines};
use og_card::{PresetError, PresetRef, PresetRegistry, StyleConfig, StylePreset};
use pretty_assertions::assert_eq;

const NEON: &str = r##"
name = "neon"
description = "Bright accent on black"
scanlines = { opacity = 0.05 }
cornerBrackets = true
radialGlow = false

[colors]
background = "#000000"
accent = "#ff00ff"
"##;

#[test]
fn test_preset_from_toml() {
    let preset = StylePreset::from_toml_str(NEON).expect("Should parse");
    assert_eq!(preset.name, "neon");
    assert_eq!(preset.description.as_deref(), Some("Bright accent on black"));
    assert_eq!(preset.enabled_decorations(), vec!["scanlines", "corner brackets"]);

    let registry = PresetRegistry::new();
    registry.register(preset).unwrap();
    let resolved = resolve_style(Some(&StyleConfig::new().with_preset("neon")), &registry).unwrap();

    assert_eq!(resolved.scanlines, Some(Scanlines { opacity: 0.05 }));
    assert_eq!(resolved.corner_brackets, Some(CornerBrackets::default()));
    assert_eq!(resolved.radial_glow, None);
    assert_eq!(resolved.colors.accent.as_deref(), Some("#ff00ff"));
}

#[test]
fn test_preset_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("neon.toml");
    std::fs::write(&path, NEON).unwrap();

    let preset = StylePreset::from_file(&path).unwrap();
    assert_eq!(preset, StylePreset::from_toml_str(NEON).unwrap());
}

#[test]
fn test_duplicate_registration_keeps_first() {
    let registry = PresetRegistry::new();
    registry
        .register(StylePreset::new("dup").with_description("first"))
        .unwrap();
    let err = registry
        .register(StylePreset::new("dup").with_description("second"))
        .unwrap_err();

    assert_eq!(
        err,
        PresetError::Duplicate {
            name: "dup".to_string()
        }
    );
    assert_eq!(
        registry.get("dup").and_then(|p| p.description.clone()).as_deref(),
        Some("first")
    );
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_builtin_names_are_reserved() {
    let registry = PresetRegistry::new();
    assert!(registry.register(StylePreset::new("terminal")).is_err());
    assert_eq!(*registry.get("terminal").unwrap(), StylePreset::terminal());
}

#[test]
fn test_list_is_insertion_ordered() {
    let registry = PresetRegistry::new();
    for name in ["zeta", "alpha", "mid"] {
        registry.register(StylePreset::new(name)).unwrap();
    }
    assert_eq!(
        registry.names(),
        vec!["minimal", "terminal", "zeta", "alpha", "mid"]
    );
    let listed: Vec<String> = registry.list().iter().map(|p| p.name.clone()).collect();
    assert_eq!(listed, registry.names());
}

#[test]
fn test_resolve_references() {
    let registry = PresetRegistry::empty();

    let default = registry.resolve(None).unwrap();
    assert_eq!(default.name, "minimal");

    let inline = StylePreset::new("inline").with_scanlines(true);
    let resolved = registry
        .resolve(Some(&PresetRef::from(inline.clone())))
        .unwrap();
    assert_eq!(*resolved, inline);
    assert!(!registry.contains("inline"));

    let err = registry
        .resolve(Some(&PresetRef::from("terminal")))
        .unwrap_err();
    assert_eq!(
        err,
        PresetError::Unknown {
            name: "terminal".to_string(),
            available: vec![],
        }
    );
}

#[test]
fn test_concurrent_registration_is_unique() {
    let registry = Arc::new(PresetRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let shared = registry.register(StylePreset::new("shared")).is_ok();
                registry
                    .register(StylePreset::new(format!("own-{}", i)))
                    .unwrap();
                shared
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(registry.len(), 2 + 1 + 8);
    let names = registry.names();
    assert_eq!(names.iter().filter(|n| n.as_str() == "shared").count(), 1);
}

#[test]
fn test_global_registry_has_builtins() {
    let registry = PresetRegistry::global();
    assert!(registry.contains("minimal"));
    assert!(registry.contains("terminal"));
    assert!(std::ptr::eq(registry, PresetRegistry::global()));
}
