//! Unit tests for config module
//!
//! Tests configuration types, defaults, serialization and loading.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;

use crate::{
    PathStateError,
    config::{ChangePolicy, Config, ConfigPaths, GeneralConfig, LogLevel, StoreOptions},
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.store.change_policy, ChangePolicy::SkipUnchanged);
    assert_eq!(config.store.max_notify_depth, 32);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialize_toml() {
    let toml_str = Config::default().to_toml_string().unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[store]"));
    assert!(toml_str.contains("change_policy = \"skip-unchanged\""));
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config {
        store: StoreOptions {
            change_policy: ChangePolicy::Always,
            max_notify_depth: 4,
        },
        ..Config::default()
    };

    let toml_str = original.to_toml_string().unwrap();
    let parsed = Config::from_toml_str(&toml_str).unwrap();

    assert_eq!(parsed, original);
}

#[test]
fn config_deserialize_toml() {
    let config = Config::from_toml_str(
        r#"
        [general]
        log_level = "debug"

        [store]
        change_policy = "always"
        max_notify_depth = 8
    "#,
    )
    .unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.store.change_policy, ChangePolicy::Always);
    assert_eq!(config.store.max_notify_depth, 8);
}

#[test]
fn config_empty_toml() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn config_partial_section_keeps_defaults() {
    let config = Config::from_toml_str(
        r#"
        [store]
        change_policy = "always"
    "#,
    )
    .unwrap();

    assert_eq!(config.store.max_notify_depth, 32);
    assert_eq!(config.general, GeneralConfig::default());
}

#[test]
fn config_invalid_toml() {
    let result = Config::from_toml_str(
        r#"
        [general
        missing closing bracket
    "#,
    );

    match result {
        Err(PathStateError::TomlParseError { location, .. }) => assert_eq!(location, "string"),
        other => panic!("expected TomlParseError, got {other:?}"),
    }
}

#[test]
fn config_unknown_fields_rejected() {
    let unknown_field = Config::from_toml_str(
        r#"
        [store]
        max_depth = 3
    "#,
    );
    let unknown_section = Config::from_toml_str(
        r#"
        [modules]
        enabled = true
    "#,
    );

    assert!(matches!(
        unknown_field,
        Err(PathStateError::TomlParseError { .. })
    ));
    assert!(matches!(
        unknown_section,
        Err(PathStateError::TomlParseError { .. })
    ));
}

#[test]
fn config_bad_enum_value_rejected() {
    let result = Config::from_toml_str(
        r#"
        [store]
        change_policy = "sometimes"
    "#,
    );

    assert!(result.is_err());
}

#[test]
fn config_zero_depth_is_accepted() {
    let config = Config::from_toml_str(
        r#"
        [store]
        max_notify_depth = 0
    "#,
    )
    .unwrap();

    assert_eq!(config.store.max_notify_depth, 0);
}

#[test]
fn config_excessive_depth_fails_validation() {
    let result = Config::from_toml_str(
        r#"
        [store]
        max_notify_depth = 1025
    "#,
    );

    match result {
        Err(PathStateError::InvalidConfigField { field, component, .. }) => {
            assert_eq!(field, "max_notify_depth");
            assert_eq!(component, "store");
        }
        other => panic!("expected InvalidConfigField, got {other:?}"),
    }
}

#[test]
fn load_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [general]
        log_level = "warn"
    "#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Warn);
}

#[test]
fn load_reports_file_location_on_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[store\n").unwrap();

    match Config::load(&path) {
        Err(PathStateError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("broken.toml"));
        }
        other => panic!("expected TomlParseError, got {other:?}"),
    }
}

#[test]
fn log_level_display_matches_serialized_form() {
    for level in [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let json = serde_json::to_value(level).unwrap();
        assert_eq!(json, serde_json::Value::String(level.to_string()));
    }
}

#[test]
fn config_paths_valid() {
    if std::env::var("HOME").is_ok() || std::env::var("XDG_CONFIG_HOME").is_ok() {
        let dir = ConfigPaths::config_dir().unwrap();
        let main = ConfigPaths::main_config().unwrap();

        assert!(dir.ends_with("pathstate"));
        assert!(main.ends_with("pathstate/config.toml"));
        assert_eq!(main.parent(), Some(dir.as_path()));
    }
}

#[test]
fn config_schema_lists_sections() {
    let schema = serde_json::to_value(schemars::schema_for!(Config)).unwrap();
    let properties = schema["properties"].as_object().unwrap();

    assert!(properties.contains_key("general"));
    assert!(properties.contains_key("store"));
}
