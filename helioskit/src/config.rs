use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Dashboard configuration. Loaded once at startup from an optional file
/// plus `HELIOS_`-prefixed environment variables (`HELIOS_API_URL` is the
/// one value a live deployment must supply).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashConfig {
    pub api_url: String,
    pub poll_interval_secs: u64,
    pub status_interval_secs: u64,
    pub request_timeout_ms: u64,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            poll_interval_secs: 30,
            status_interval_secs: 30,
            request_timeout_ms: 5000,
        }
    }
}

impl DashConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_secs(self.status_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

pub fn load_config(path: Option<&str>) -> Result<DashConfig> {
    let mut builder = Config::builder()
        .set_default("api_url", "http://localhost:8080")?
        .set_default("poll_interval_secs", 30i64)?
        .set_default("status_interval_secs", 30i64)?
        .set_default("request_timeout_ms", 5000i64)?;

    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path));
    }

    let config = builder
        .add_source(Environment::with_prefix("HELIOS"))
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None).expect("defaults must load");
        assert_eq!(config.poll_interval_secs, 30);
        assert_eq!(config.status_interval_secs, 30);
        assert_eq!(config.request_timeout_ms, 5000);
        assert!(!config.api_url.is_empty());
    }

    #[test]
    fn test_interval_accessors() {
        let config = DashConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_millis(5000));
    }
}
