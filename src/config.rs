use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the REST API, including the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Origin that relative media paths resolve against.
    #[serde(default = "default_media_url")]
    pub media_url: String,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8001/api".to_string()
}

fn default_media_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            media_url: default_media_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Items fetched per page on the photos/videos/messages views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_note_width")]
    pub note_width: u16,

    #[serde(default = "default_note_height")]
    pub note_height: u16,

    #[serde(default = "default_note_gap")]
    pub note_gap: u16,
}

fn default_page_size() -> usize {
    20
}

fn default_note_width() -> u16 {
    24
}

fn default_note_height() -> u16 {
    6
}

fn default_note_gap() -> u16 {
    2
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            note_width: default_note_width(),
            note_height: default_note_height(),
            note_gap: default_note_gap(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            // Create default config
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("souvenir")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.api_url, "http://127.0.0.1:8001/api");
        assert_eq!(config.ui.page_size, 20);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\napi_url = \"https://gallery.example/api\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.api_url, "https://gallery.example/api");
        // Untouched sections keep their defaults
        assert_eq!(config.server.media_url, "http://127.0.0.1:8001");
        assert_eq!(config.ui.note_width, 24);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.ui.page_size = 50;
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ui.page_size, 50);
    }
}
