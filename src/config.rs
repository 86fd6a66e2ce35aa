//! Configuration Module
//!
//! Loads server configuration from the environment (and an optional `.env` file).

use std::env;

use thiserror::Error;

/// Default HTTP port when `SERVER_PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 8000;

/// Runtime mode, selected by `NODE_ENV`.
///
/// Controls how much detail server errors expose and the default log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    Production,
    #[default]
    Development,
}

impl RunMode {
    /// `production` selects [`RunMode::Production`]; anything else is development.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("production") => RunMode::Production,
            _ => RunMode::Development,
        }
    }

    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            RunMode::Production => "address_book=info,tower_http=info",
            RunMode::Development => "address_book=debug,tower_http=debug",
        }
    }
}

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Error verbosity and log level
    pub mode: RunMode,
    /// Shared bearer secret; `None` rejects every protected request
    pub auth_key: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL used to build `Location` headers, without trailing slash
    pub public_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NODE_ENV` - `production` or anything else (default: development)
    /// - `AUTH_KEY` - Bearer token secret (default: none)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `PUBLIC_URL` - Base for `Location` headers (default: `http://localhost:<port>`)
    pub fn from_env() -> Self {
        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let public_url = optional_var("PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| local_url(server_port));

        Self {
            mode: RunMode::from_node_env(env::var("NODE_ENV").ok().as_deref()),
            auth_key: optional_var("AUTH_KEY"),
            server_port,
            public_url,
        }
    }

    /// Returns a copy of this config with the given bearer secret.
    pub fn with_auth_key(mut self, key: impl Into<String>) -> Self {
        self.auth_key = Some(key.into());
        self
    }

    /// Returns a copy of this config running in the given mode.
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Absolute URL of a single address record.
    pub fn address_url(&self, id: u64) -> String {
        format!("{}/address/{}", self.public_url, id)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RunMode::Development,
            auth_key: None,
            server_port: DEFAULT_PORT,
            public_url: local_url(DEFAULT_PORT),
        }
    }
}

fn local_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

fn optional_var(key: &'static str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Loads `.env` from the working directory if one exists.
///
/// Skipped entirely when `ADDRESS_BOOK_SKIP_DOTENV` is set.
pub fn hydrate_env_file() -> Result<(), ConfigError> {
    if env::var_os("ADDRESS_BOOK_SKIP_DOTENV").is_some() {
        return Ok(());
    }
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ConfigError::Dotenv { source: err }),
    }
}

/// Errors emitted while hydrating the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load .env file: {source}")]
    Dotenv {
        #[from]
        source: dotenvy::Error,
    },
}
