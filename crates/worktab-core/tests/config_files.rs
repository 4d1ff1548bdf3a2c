//! Loading configuration from files on disk.

use std::io::Write;

use worktab_core::{ConfigError, FeedbackConfig, WorktabConfig};

#[test]
fn loads_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[feedback]\nuse_sounds = false\nverbose_messages = true\n\n[layout]\nicon_diameter = 40.0"
    )
    .unwrap();

    let config = WorktabConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(
        config.feedback,
        FeedbackConfig {
            use_sounds: false,
            verbose_messages: true,
        }
    );
    assert_eq!(config.layout.icon_diameter, 40.0);
    assert_eq!(config.layout.short_spacing, 5.0);
}

#[test]
fn loads_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"layout":{{"short_spacing":8.0}}}}"#).unwrap();

    let config = WorktabConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.feedback, FeedbackConfig::default());
    assert_eq!(config.layout.short_spacing, 8.0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WorktabConfig::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worktab.toml");
    let mut config = WorktabConfig::default();
    config.feedback = FeedbackConfig::QUIET;
    config.layout.icon_diameter = 26.0;

    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
    assert_eq!(WorktabConfig::from_toml_file(&path).unwrap(), config);
}
