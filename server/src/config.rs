//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid VOCAB_BACKEND_URL (expected http:// or https://): {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Vocabulary backend base URL, without trailing slash.
    pub backend_url: String,
    pub upstream_timeout: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `VOCAB_BACKEND_URL`: default `http://127.0.0.1:5000`
    /// - `VOCAB_UPSTREAM_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `VOCAB_BACKEND_URL` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`HostConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let backend_url = parse_backend_url(lookup("VOCAB_BACKEND_URL").as_deref())?;
        let timeout_secs = lookup("VOCAB_UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Ok(Self { port, backend_url, upstream_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map_or(DEFAULT_BACKEND_URL, str::trim);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
