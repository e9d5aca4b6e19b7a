use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per URL (including the first).
    pub max_attempts: u32,
    /// Delay in seconds after the first failed attempt; doubles each retry.
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
    /// Add random extra delay to each backoff.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 1.0,
            max_delay_secs: 8,
            jitter: false,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        RetryPolicy {
            max_attempts: cfg.max_attempts.max(1),
            base_delay: Duration::try_from_secs_f64(cfg.base_delay_secs).unwrap_or_default(),
            max_delay: Duration::from_secs(cfg.max_delay_secs),
            jitter: cfg.jitter,
        }
    }
}

/// Global settings loaded from `~/.config/mscrape/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-attempt request timeout in seconds.
    pub request_timeout_secs: f64,
    /// Reserved; profiles are fetched one at a time.
    pub concurrency: usize,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Outbound `User-Agent`.
    pub user_agent: String,
    /// Optional retry policy; if missing, built-in defaults are used.
    pub retry: Option<RetryConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 15.0,
            concurrency: 2,
            log_level: "info".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            retry: None,
        }
    }
}

impl Settings {
    /// Timeout as a `Duration`; zero, negative or non-finite values fall back to 15s.
    pub fn request_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_timeout_secs)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(Duration::from_secs(15))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryPolicy::from)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mscrape")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load settings from the XDG config file, creating a default file if none exists.
pub fn load_or_init() -> Result<Settings> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Settings::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load settings from an explicit file. A missing file yields defaults.
pub fn load_from_path(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!("settings file {} not found, using defaults", path.display());
        return Ok(Settings::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: Settings =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_values() {
        let cfg = Settings::default();
        assert_eq!(cfg.request_timeout(), Duration::from_secs(15));
        assert_eq!(cfg.concurrency, 2);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.user_agent, "Mozilla/5.0");
        assert_eq!(cfg.retry_policy().max_attempts, 3);
        assert_eq!(cfg.retry_policy().base_delay, Duration::from_secs(1));
        assert_eq!(cfg.retry_policy().max_delay, Duration::from_secs(8));
    }

    #[test]
    fn settings_toml_roundtrip() {
        let cfg = Settings::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml = r#"
            user_agent = "mscrape-test/1.0"
        "#;
        let cfg: Settings = toml::from_str(toml).unwrap();
        assert_eq!(cfg.user_agent, "mscrape-test/1.0");
        assert_eq!(cfg.request_timeout_secs, 15.0);
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn settings_toml_retry_section() {
        let toml = r#"
            request_timeout_secs = 5.5
            log_level = "debug"

            [retry]
            max_attempts = 5
            base_delay_secs = 0.5
            jitter = true
        "#;
        let cfg: Settings = toml::from_str(toml).unwrap();
        assert_eq!(cfg.request_timeout(), Duration::from_millis(5500));
        let policy = cfg.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay, Duration::from_millis(500));
        assert_eq!(policy.max_delay, Duration::from_secs(8));
        assert!(policy.jitter);
    }

    #[test]
    fn load_from_missing_path_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from_path(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Settings::default());
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "concurrency = 4\n").unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.concurrency, 4);
    }

    #[test]
    fn load_from_path_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "request_timeout_secs = \"soon\"\n").unwrap();
        assert!(load_from_path(&path).is_err());
    }
}
