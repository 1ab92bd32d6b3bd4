//! Runtime configuration.
//!
//! Values come from the process environment (a `.env` file is loaded first if
//! present) and can be overridden per invocation from the CLI.

use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://www.dhlottery.co.kr";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ENV_BASE_URL: &str = "LOTTO_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "LOTTO_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scheme + host of the lottery site, without a trailing slash.
    pub base_url: String,
    /// Upper bound on each provider call. A call that needs more than one
    /// request spreads this one budget across all of them.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Config::default();
        if let Some(url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(&url)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                AppError::new(2, format!("Invalid {ENV_TIMEOUT_SECS} '{raw}': {e}"))
            })?;
            config = config.with_timeout_secs(secs)?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Result<Self, AppError> {
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AppError::new(
                2,
                format!("Base URL must start with http:// or https://, got '{url}'."),
            ));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self, AppError> {
        if secs == 0 {
            return Err(AppError::new(2, "HTTP timeout must be > 0 seconds."));
        }
        self.timeout = Duration::from_secs(secs);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn env_overrides_are_applied() {
        let config = Config::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://127.0.0.1:9000/"),
            (ENV_TIMEOUT_SECS, "3"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_are_usage_errors() {
        let err = Config::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = Config::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = Config::default().with_base_url("dhlottery.co.kr").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
