// ABOUTME: Config file loading and settings resolution for tables-admin
// ABOUTME: Merges flags, environment, ~/.config/area120-tables/config.toml, and defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tables_client::proto::DEFAULT_ENDPOINT;
use tables_client::{CallSettings, ClientConfig, RetryPolicy};

/// Config file structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AdminConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    /// Per-attempt deadline in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

fn default_max_attempts() -> u32 {
    5
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    60_000
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::idempotent()
            .with_max_attempts(self.max_attempts)
            .with_backoff(
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            )
    }
}

impl AdminConfig {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(".config/area120-tables/config.toml"))
    }

    /// Load the config at the default location. A missing file yields
    /// the empty config; an unreadable or malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: AdminConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            if endpoint.trim().is_empty() {
                bail!("endpoint must not be empty");
            }
        }
        if self.timeout_secs == Some(0) {
            bail!("timeout_secs must be greater than zero");
        }
        if let Some(retry) = &self.retry {
            if retry.max_attempts == 0 {
                bail!("retry.max_attempts must be at least 1");
            }
            if retry.initial_backoff_ms > retry.max_backoff_ms {
                bail!("retry.initial_backoff_ms exceeds retry.max_backoff_ms");
            }
        }
        Ok(())
    }
}

/// Values given on the command line (or through their env fallbacks).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u32>,
}

/// Normalize an endpoint to include a scheme. Bare hosts default to TLS.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let e = endpoint.trim();
    if e.starts_with("http://") || e.starts_with("https://") {
        return e.to_string();
    }
    format!("https://{}", e)
}

/// Resolve the client config: overrides > config file > defaults.
pub fn resolve(overrides: Overrides, config: AdminConfig) -> ClientConfig {
    let endpoint = overrides
        .endpoint
        .or(config.endpoint)
        .map(|e| normalize_endpoint(&e))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let mut settings = CallSettings::default();
    if let Some(secs) = overrides.timeout_secs.or(config.timeout_secs) {
        settings = settings.with_timeout(Duration::from_secs(secs));
    }
    let retry = match (overrides.retries, config.retry) {
        (Some(0), _) => None,
        (Some(n), Some(retry)) => Some(retry.policy().with_max_attempts(n)),
        (Some(n), None) => Some(RetryPolicy::idempotent().with_max_attempts(n)),
        (None, retry) => retry.map(|r| r.policy()),
    };
    if let Some(policy) = retry {
        settings = settings.with_retry(policy);
    }

    let mut client = ClientConfig::new(endpoint).with_settings(settings);
    if let Some(token) = overrides.token.or(config.token) {
        client = client.with_token(token);
    }
    client
}
