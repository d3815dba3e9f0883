//! Config file loading against real files.

use std::fs;

use labsim_engine::{ConfigError, LabConfig};
use tempfile::tempdir;

#[test]
fn high_contrast_is_read_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\nascii_only = false\nhigh_contrast = true\n",
    )
    .unwrap();

    let config = LabConfig::load_from(&path).unwrap().unwrap();
    assert!(config.app.high_contrast);
    assert!(!config.app.ascii_only);
}

#[test]
fn unknown_sections_are_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[plots]\nwidth = 80\n").unwrap();

    let config = LabConfig::load_from(&path).unwrap().unwrap();
    assert!(!config.app.high_contrast);
}

#[test]
fn directory_in_place_of_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = LabConfig::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), &dir.path().to_path_buf());
}

#[test]
fn wrong_type_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\nascii_only = \"yes\"\n").unwrap();

    let err = LabConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
