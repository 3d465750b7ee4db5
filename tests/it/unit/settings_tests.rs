//! Unit tests for settings persistence.

use std::fs;
use tempfile::tempdir;
use tileboard::settings::{InteractionSettings, ZoomSettings, default_settings_path};

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("interaction.json");

    let settings = InteractionSettings {
        tile_size: 64.0,
        default_connector_color: "#000000".into(),
        ..InteractionSettings::default()
    };
    settings.save_to(&path).unwrap();

    let loaded = InteractionSettings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_fields_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("interaction.json");
    fs::write(&path, r#"{ "zoom": { "max": 2.0 } }"#).unwrap();

    let loaded = InteractionSettings::load_from(&path).unwrap();
    assert_eq!(loaded.tile_size, 50.0);
    assert_eq!(
        loaded.zoom,
        ZoomSettings {
            max: 2.0,
            ..ZoomSettings::default()
        }
    );
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("interaction.json");
    fs::write(&path, "{ not json").unwrap();

    let err = InteractionSettings::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("interaction.json"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("interaction.json");
    fs::write(&path, r#"{ "tile_size": 0.0 }"#).unwrap();

    assert!(InteractionSettings::load_from(&path).is_err());
}

#[test]
fn test_default_path() {
    // None only on platforms without a config directory
    let path = default_settings_path();
    assert!(path.is_none_or(|p| p.ends_with("tileboard/interaction.json")));
}
