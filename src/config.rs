use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Seconds between polls unless overridden. The timer runs well under a
/// minute so the badge tracks current conditions closely.
pub const DEFAULT_POLL_SECS: u64 = 10;

pub const DEFAULT_STORE_PATH: &str = "weathervane.json";

/// Daemon configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub store_path: PathBuf,
    pub poll_interval: Duration,
}

impl Config {
    /// Read configuration from the environment. Only the API key is
    /// required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .context("OPENWEATHER_API_KEY is not set")?;

        let store_path = env::var("WEATHERVANE_STORE")
            .ok()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        let poll_interval = poll_interval_from(env::var("WEATHERVANE_POLL_SECS").ok());

        Ok(Self {
            api_key,
            store_path,
            poll_interval,
        })
    }
}

/// Parse the poll period override. Anything unusable, zero included, falls
/// back to the default.
fn poll_interval_from(value: Option<String>) -> Duration {
    let secs = value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_POLL_SECS);
    Duration::from_secs(secs)
}
