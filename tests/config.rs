use std::path::PathBuf;

use calcboard::{config::Config, error::ConfigError, visibility::SectionStates};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("calcboard-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn defaults_show_everything() {
    let config = Config::default();
    assert_eq!(config.sections, SectionStates::uniform(true));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn missing_keys_fall_back() {
    let config: Config = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
    assert_eq!(config.sections, SectionStates::uniform(true));
    assert_eq!(config.logging.level, "debug");

    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn loads_explicit_file() {
    let path = temp_config("explicit", "[sections]\nexpression = false\nquadratic = false\n");
    let config = Config::load(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.sections,
               SectionStates { expression: false,
                               linear:     true,
                               quadratic:  false, });
}

#[test]
fn explicit_file_must_exist() {
    let path = std::env::temp_dir().join("calcboard-does-not-exist.toml");
    assert!(matches!(Config::load(Some(path.as_path())), Err(ConfigError::Read { .. })));
}

#[test]
fn malformed_file_is_reported() {
    let path = temp_config("malformed", "[sections]\nlinear = \"yes\"\n");
    let result = Config::load(Some(path.as_path()));
    std::fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config file"));
}
