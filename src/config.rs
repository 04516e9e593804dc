//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$INBOXVIEW_CONFIG` (environment variable)
//! 2. `~/.config/inboxview/config.toml` (Linux/macOS)
//!    `%APPDATA%\inboxview\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// Backend connection.
    pub server: ServerConfig,
    /// Periodic refresh.
    pub polling: PollingConfig,
    /// Display and layout settings.
    pub display: DisplayConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// `strftime` format string for receipt timestamps (local time).
    pub date_format: String,
    /// Override cache directory for logs.
    pub cache_dir: Option<PathBuf>,
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

/// Backend connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the capture server's web interface.
    pub url: String,
    /// Per-request timeout in seconds. Unset means requests may wait forever.
    ///
    /// A hung list request holds back the periodic refresh: timer ticks are
    /// skipped until it is answered, so at most one list fetch is in flight.
    /// Manual refreshes still go out and each waits on its own worker thread.
    pub timeout_secs: Option<u64>,
}

/// Periodic refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Seconds between two list refreshes.
    pub interval_secs: u64,
}

/// Display and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Initial layout: "horizontal", "vertical", "list-only".
    pub layout: String,
}

// ── Default implementations ─────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            cache_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8025".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_secs: 10 }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: "horizontal".to_string(),
        }
    }
}

/// Accepted values for `display.layout`.
pub const LAYOUTS: [&str; 3] = ["horizontal", "vertical", "list-only"];

impl Config {
    /// Reject values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if !LAYOUTS.contains(&self.display.layout.as_str()) {
            return Err(ViewerError::Config(format!(
                "display.layout must be one of {}, got '{}'",
                LAYOUTS.join(", "),
                self.display.layout
            )));
        }
        if self.general.date_format.trim().is_empty() {
            return Err(ViewerError::Config(
                "general.date_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl ServerConfig {
    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl PollingConfig {
    /// Refresh interval, never shorter than one second.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

// ── Load ────────────────────────────────────────────────────────

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    match config_file_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Config::default(),
    }
}

/// Load configuration from an explicit file, falling back to defaults.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(cfg) => {
                tracing::info!(path = %path.display(), "Loaded config");
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse config, using defaults"
                );
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read config file, using defaults"
            );
            Config::default()
        }
    }
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("INBOXVIEW_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|d| d.join("inboxview").join("config.toml"))
}

/// Return the cache directory for logs.
pub fn cache_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cache_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inboxview")
}

/// Return the log file path.
pub fn log_file_path(config: &Config) -> PathBuf {
    cache_dir(config).join("inboxview.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.server.url, "http://localhost:8025");
        assert_eq!(cfg.server.timeout(), None);
        assert_eq!(cfg.polling.interval(), Duration::from_secs(10));
        assert_eq!(cfg.display.layout, "horizontal");
        assert_eq!(cfg.general.log_level, "warn");
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let mut cfg = Config::default();
        cfg.server.timeout_secs = Some(5);
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.server.url, cfg.server.url);
        assert_eq!(parsed.server.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(parsed.general.date_format, cfg.general.date_format);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let partial = r#"
[server]
url = "http://mailsim:9000"

[polling]
interval_secs = 3
"#;
        let cfg: Config = toml::from_str(partial).expect("parse partial");
        assert_eq!(cfg.server.url, "http://mailsim:9000");
        assert_eq!(cfg.polling.interval_secs, 3);
        assert_eq!(cfg.server.timeout_secs, None);
        assert_eq!(cfg.general.date_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let cfg = PollingConfig { interval_secs: 0 };
        assert_eq!(cfg.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_from_file_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[display]\nlayout = \"vertical\"\n").unwrap();
        assert_eq!(load_config_from(&good).display.layout, "vertical");

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[display\nlayout = ").unwrap();
        assert_eq!(load_config_from(&bad).display.layout, "horizontal");

        let missing = dir.path().join("missing.toml");
        assert_eq!(load_config_from(&missing).server.url, "http://localhost:8025");
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut cfg = Config::default();
        cfg.display.layout = "diagonal".to_string();
        assert!(matches!(cfg.validate(), Err(ViewerError::Config(_))));

        let mut cfg = Config::default();
        cfg.general.date_format = "  ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_cache_dir_override() {
        let mut cfg = Config::default();
        cfg.general.cache_dir = Some(PathBuf::from("/tmp/inboxview-logs"));
        assert_eq!(
            log_file_path(&cfg),
            PathBuf::from("/tmp/inboxview-logs/inboxview.log")
        );
    }
}
