use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use super::*;

#[test]
fn no_location_gives_the_defaults() {
    assert_eq!(Settings::default(), read(None));
}

#[test]
fn missing_file_gives_the_defaults() {
    let dir = tempdir().unwrap();

    let settings = read(Some(dir.path().join("settings.toml")));

    assert_eq!(Settings::default(), settings);
}

#[test]
fn reads_the_clipboard_clear_delay() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "clipboard_clear_seconds = 5\n").unwrap();

    assert_eq!(5, read(Some(path)).clipboard_clear_seconds);
}

#[test]
fn nonsense_values_fall_back_to_the_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "clipboard_clear_seconds = -3\n").unwrap();

    assert_eq!(
        Settings::default().clipboard_clear_seconds,
        read(Some(path)).clipboard_clear_seconds
    );
}

#[test]
fn settings_file_location_honours_the_environment_override() {
    std::env::set_var("PASSMITH_CONFIG", "/tmp/passmith-settings.toml");

    assert_eq!(
        Some(PathBuf::from("/tmp/passmith-settings.toml")),
        settings_file_location()
    );

    std::env::remove_var("PASSMITH_CONFIG");
}
