use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub youtube_api_key: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytq/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Resolve the YouTube Data API key. The YOUTUBE_API_KEY environment
    /// variable takes precedence over the config file.
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("YOUTUBE_API_KEY") {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        self.youtube_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                eyre::eyre!(
                    "no YouTube API key configured; set youtube_api_key in {} or the YOUTUBE_API_KEY environment variable",
                    config_path().display()
                )
            })
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytq")
        .join("config.toml")
}
