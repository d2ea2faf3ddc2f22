//! Application configuration.
//!
//! A small JSON file under the platform config directory
//! (`~/.config/ayah-card/config.json` on Linux). Missing file or fields fall
//! back to defaults; a malformed file is treated as missing rather than
//! aborting startup.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// User configuration, all fields optional on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where exported cards are written. Defaults to the platform download
    /// directory, then the current directory.
    pub output_dir: Option<PathBuf>,
    /// Translation edition selected at startup.
    pub default_translation: String,
    /// Override for the verse service base URL.
    pub api_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            default_translation: "en.asad".to_string(),
            api_base_url: None,
        }
    }
}

impl Config {
    /// Path of the config file, or `None` if the platform config dir cannot
    /// be determined.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ayah-card").join("config.json"))
    }

    /// Load the config, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("ignoring malformed config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist the config, creating the directory if needed.
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        fs::write(path, json)
    }

    /// Resolve the effective export directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_translation, "en.asad");
        assert!(config.output_dir.is_none());
        assert!(config.api_base_url.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_dir":"/tmp/cards"}"#).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/cards")));
        assert_eq!(config.default_translation, "en.asad");
    }

    #[test]
    fn test_roundtrip() {
        let config = Config {
            output_dir: Some(PathBuf::from("/tmp/out")),
            default_translation: "en.pickthall".to_string(),
            api_base_url: Some("http://localhost:9999".to_string()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_explicit_output_dir_wins() {
        let config = Config {
            output_dir: Some(PathBuf::from("/somewhere")),
            ..Default::default()
        };
        assert_eq!(config.resolve_output_dir(), PathBuf::from("/somewhere"));
    }
}
