use agent_exposure_common::config::{ExposureConfig, OutputFormat};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_load_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("exposure.toml");

    let config_content = r#"
[server]
bind_addr = "0.0.0.0:9000"
max_sessions = 16

[logging]
level = "debug"

[cli]
show_help_text = false
output = "json"
server_url = "http://localhost:9000"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = ExposureConfig::from_file(&config_path).unwrap();

    assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
    assert_eq!(config.server.max_sessions, 16);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.cli.show_help_text);
    assert_eq!(config.cli.output, OutputFormat::Json);
    assert_eq!(config.cli.server_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(config.bind_addr().unwrap().port(), 9000);
}

#[test]
fn test_config_missing_sections_use_defaults() {
    let config = ExposureConfig::from_toml_str("[logging]\nlevel = \"warn\"\n").unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
    assert_eq!(config.server.max_sessions, 1024);
    assert!(config.cli.show_help_text);
    assert_eq!(config.cli.output, OutputFormat::Text);
    assert!(config.cli.server_url.is_none());
}

#[test]
fn test_config_validation_zero_sessions() {
    let result = ExposureConfig::from_toml_str("[server]\nmax_sessions = 0\n");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("max_sessions"));
}

#[test]
fn test_config_validation_bad_bind_addr() {
    let result = ExposureConfig::from_toml_str("[server]\nbind_addr = \"localhost\"\n");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("bind_addr"));
}

#[test]
fn test_config_validation_unknown_log_level() {
    let result = ExposureConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("logging.level"));
}

#[test]
fn test_config_validation_server_url_scheme() {
    let result = ExposureConfig::from_toml_str("[cli]\nserver_url = \"ftp://example\"\n");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("server_url"));
}

#[test]
fn test_config_rejects_malformed_toml() {
    let result = ExposureConfig::from_toml_str("[server\nbind_addr = ");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("TOML"));
}

#[test]
fn test_config_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ExposureConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(result.unwrap_err().to_string().contains("IO error"));
}
