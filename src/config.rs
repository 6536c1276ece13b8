use std::{env, time::Duration};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Deployment settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub api_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            api_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value: port })?;
        }

        if let Some(url) = lookup("DASHBOARD_API_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                return Err(ConfigError::Invalid {
                    name: "DASHBOARD_API_URL",
                    value: url.to_string(),
                });
            }
            config.api_url = url.to_string();
        }

        if let Some(secs) = lookup("DASHBOARD_API_TIMEOUT_SECS") {
            let parsed: u64 = secs.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "DASHBOARD_API_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            config.api_timeout = (parsed > 0).then(|| Duration::from_secs(parsed));
        }

        Ok(config)
    }
}
