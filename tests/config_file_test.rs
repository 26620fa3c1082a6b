//! Tests for loading the TOML configuration.

use std::io::Write;
use strictly_sos_games::{GameConfig, GameMode, Letter};

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "board_size = 5\nmode = \"General\"\nletter = \"O\"\nlog_file = \"game.log\""
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.board_size().get(), 5);
    assert_eq!(*config.mode(), GameMode::General);
    assert_eq!(*config.letter(), Letter::O);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_small_board_in_file_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 1").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = GameConfig::load(Some(&path)).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_file_then_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 5\nmode = \"General\"").unwrap();

    let config = GameConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(Some(8), None, Some(Letter::O), None)
        .unwrap();
    assert_eq!(config.board_size().get(), 8);
    assert_eq!(*config.mode(), GameMode::General);
    assert_eq!(*config.letter(), Letter::O);
}
