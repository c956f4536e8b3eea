//! Tests for config loading

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let result = load_config_from_path(Path::new("/nonexistent/autofill/config.toml"));
    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[field]
default_value = "--"

[theme]
accent = "magenta"
list_height = 4
"#
    )
    .unwrap();

    let result = load_config_from_path(file.path());

    assert!(result.warning.is_none());
    assert_eq!(result.config.field.default_value, "--");
    assert_eq!(result.config.theme.accent, "magenta");
    assert_eq!(result.config.theme.list_height, 4);
}

#[test]
fn test_invalid_file_warns_and_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[field]\narrow_up = \"bounce\"\n").unwrap();

    let result = load_config_from_path(file.path());

    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Config error"));
}

#[test]
fn test_parse_config_error_variant() {
    let err = parse_config("not = [valid").unwrap_err();
    assert!(matches!(err, AutofillError::InvalidConfig(_)));
}

#[test]
fn test_config_path_ends_with_file_name() {
    if let Some(path) = config_path() {
        assert!(path.ends_with("autofill/config.toml"));
    }
}
