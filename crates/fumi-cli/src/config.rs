//! Configuration management for Fumi CLI
//!
//! Stores the directory source and letter decorations in ~/.config/fumi/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = "fumi";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory server; `/api/guests` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Local directory file, used instead of the server when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<PathBuf>,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Sender line at the bottom of the letter
    #[serde(default = "default_signature")]
    pub signature: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_subtitle() -> String {
    "- 2026.03.14 Uraoka Masafumi & Yukako Miki -".to_string()
}

fn default_signature() -> String {
    "裏岡 雅史 & 三木 悠夏子".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            directory_path: None,
            subtitle: default_subtitle(),
            signature: default_signature(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Point at a directory server (and stop using any local file)
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url.trim_end_matches('/').to_string();
        self.directory_path = None;
    }

    /// Read guests from a local file instead of the server
    pub fn set_directory_path(&mut self, path: PathBuf) {
        self.directory_path = Some(path);
    }
}
