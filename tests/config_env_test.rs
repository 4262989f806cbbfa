use fa2ms::config::{Config, LogFormat, ENV_HOST, ENV_LOG, ENV_PORT};
use fa2ms::Fa2msError;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    for key in [ENV_HOST, ENV_PORT, ENV_LOG] {
        env::remove_var(key);
    }
}

fn write_config(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join("fa2ms.yaml");
    fs::write(&path, yaml).unwrap();
    path
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    clear_env();

    let config = Config::load(None).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.server.port, 5000);
    assert_eq!(
        config.server.socket_addr().unwrap().to_string(),
        "0.0.0.0:5000"
    );
}

#[test]
#[serial]
fn test_file_values_override_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "server:\n  host: 127.0.0.1\n  port: 8080\nlogging:\n  format: json\n",
    );

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server:\n  port: 8080\nlogging:\n  level: debug\n");

    env::set_var(ENV_PORT, "9090");
    env::set_var(ENV_LOG, "warn");
    let config = Config::load(Some(&path));
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.logging.level, "warn");
}

#[test]
#[serial]
fn test_empty_environment_values_are_ignored() {
    clear_env();
    env::set_var(ENV_HOST, "");
    let config = Config::load(None);
    clear_env();

    assert_eq!(config.unwrap().server.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_invalid_port_in_environment() {
    clear_env();
    env::set_var(ENV_PORT, "not-a-port");
    let result = Config::load(None);
    clear_env();

    assert!(matches!(result, Err(Fa2msError::Config(_))));
}

#[test]
#[serial]
fn test_missing_file_is_config_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.yaml");

    match Config::load(Some(&missing)) {
        Err(Fa2msError::Config(message)) => assert!(message.contains("absent.yaml")),
        other => panic!("expected config error, got {:?}", other),
    }
}
