//! Application configuration

use std::time::Duration;

use anyhow::{Context as _, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_URL_ENV: &str = "EMPLOYEE_DIRECTORY_API_URL";
pub const TIMEOUT_ENV: &str = "EMPLOYEE_DIRECTORY_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL (e.g., "http://localhost:5001")
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `EMPLOYEE_DIRECTORY_API_URL` and
    /// `EMPLOYEE_DIRECTORY_TIMEOUT_SECS` when set
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
