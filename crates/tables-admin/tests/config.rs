// ABOUTME: Integration tests for tables-admin.
// ABOUTME: Tests config file loading and how it combines with command-line flags.

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use tables_admin::config::{resolve, AdminConfig, Overrides};
use tables_admin::Cli;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_loading() {
    let file = write_config(
        r#"
endpoint = "http://localhost:7000"
token = "file-token"
timeout_secs = 15

[retry]
max_attempts = 3
"#,
    );

    let config = AdminConfig::load_from(file.path()).unwrap();
    assert_eq!(config.endpoint.as_deref(), Some("http://localhost:7000"));
    assert_eq!(config.token.as_deref(), Some("file-token"));
    assert_eq!(config.timeout_secs, Some(15));

    let retry = config.retry.clone().unwrap();
    assert_eq!(retry.max_attempts, 3);
    assert_eq!(retry.initial_backoff_ms, 100);
    assert_eq!(retry.max_backoff_ms, 60_000);

    let client = resolve(Overrides::default(), config);
    assert_eq!(client.channel.address, "http://localhost:7000");
    assert!(!client.channel.use_tls);
    assert_eq!(client.settings.timeout, Some(Duration::from_secs(15)));
    assert_eq!(client.settings.retry.unwrap().max_attempts, 3);
}

#[test]
fn test_empty_config_is_default() {
    let file = write_config("");
    let config = AdminConfig::load_from(file.path()).unwrap();
    assert_eq!(config, AdminConfig::default());
}

#[test]
fn test_malformed_config_is_an_error() {
    let file = write_config("endpoint = [not toml");
    let err = AdminConfig::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("timeout_secs = 0");
    assert!(AdminConfig::load_from(file.path()).is_err());

    let file = write_config("[retry]\nmax_attempts = 0");
    assert!(AdminConfig::load_from(file.path()).is_err());

    let file = write_config("[retry]\ninitial_backoff_ms = 500\nmax_backoff_ms = 100");
    assert!(AdminConfig::load_from(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("config.toml");
    assert!(AdminConfig::load_from(&missing).is_err());
}

#[test]
fn test_flags_override_file() {
    let file = write_config("endpoint = \"http://from-file:1\"\ntoken = \"file-token\"");
    let config = AdminConfig::load_from(file.path()).unwrap();

    let cli = Cli::try_parse_from([
        "tables-admin",
        "--endpoint",
        "flag-host:443",
        "--retries",
        "0",
        "tables",
        "list",
    ])
    .unwrap();
    let overrides = Overrides {
        endpoint: cli.endpoint,
        token: cli.token,
        timeout_secs: cli.timeout,
        retries: cli.retries,
    };

    let client = resolve(overrides, config);
    assert_eq!(client.channel.address, "https://flag-host:443");
    assert!(client.channel.use_tls);
    assert_eq!(client.token.as_deref(), Some("file-token"));
    assert!(client.settings.retry.is_none());
}
