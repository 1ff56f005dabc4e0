//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::CoreError;
use crate::Result;

/// Backend origin used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "https://drop-pick-production.up.railway.app";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend origin; request paths are appended to it
    pub api_base_url: Url,
    /// Path to the local storage database
    pub database_path: PathBuf,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            api_base_url: default_base_url(),
            database_path: data_dir.join("hrdesk.db"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Defaults overridden by `HRDESK_API_URL`, `HRDESK_DATA_DIR` and
    /// `HRDESK_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("HRDESK_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::data_dir);
        let mut config = Self::new(data_dir);

        if let Some(raw) = lookup("HRDESK_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_base_url = parse_base_url(raw.trim())?;
        }

        if let Some(raw) = lookup("HRDESK_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("HRDESK_REQUEST_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            if secs == 0 {
                return Err(CoreError::Config(
                    "HRDESK_REQUEST_TIMEOUT_SECS must be positive".to_string(),
                ));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("HRDesk"))
            .unwrap_or_else(|| PathBuf::from(".hrdesk"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

fn default_base_url() -> Url {
    // Constant is a valid absolute URL
    Url::parse(DEFAULT_API_BASE_URL).unwrap_or_else(|_| unreachable!())
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| CoreError::Config(format!("Invalid HRDESK_API_URL {raw:?}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CoreError::Config(format!(
            "HRDESK_API_URL must be http or https: {raw}"
        )));
    }

    Ok(url)
}

// Simple dirs implementation for the local data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
