//! Configuration file management
//!
//! This module handles loading and saving the application configuration
//! file, which holds the timing settings and an optional default slides
//! directory.

use crate::constants::{
    ADVANCE_INTERVAL_DEFAULT_SECS, ADVANCE_INTERVAL_MAX_SECS, ADVANCE_INTERVAL_MIN_SECS,
    TRANSITION_DEFAULT_MS, TRANSITION_MAX_MS, TRANSITION_MIN_MS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration stored in config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Auto-advance interval in seconds (default: 8)
    #[serde(default = "default_advance_interval")]
    pub advance_interval_secs: u64,
    /// Transition duration in milliseconds (default: 800)
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Default slides directory used when none is given on the command line
    #[serde(default)]
    pub slides_dir: Option<PathBuf>,
}

fn default_advance_interval() -> u64 {
    ADVANCE_INTERVAL_DEFAULT_SECS
}

fn default_transition_ms() -> u64 {
    TRANSITION_DEFAULT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advance_interval_secs: default_advance_interval(),
            transition_ms: default_transition_ms(),
            slides_dir: None,
        }
    }
}

impl Config {
    /// Get the standard config file path
    ///
    /// - macOS: `~/Library/Application Support/showreel/config.toml`
    /// - Linux: `~/.config/showreel/config.toml`
    /// - Windows: `%APPDATA%\showreel\config.toml`
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .expect("Failed to determine config directory")
            .join("showreel");

        config_dir.join("config.toml")
    }

    /// Load config from the standard location, falling back to defaults
    /// when no file exists. A present-but-invalid file is an error.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("No config file at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load config from a specific path
    ///
    /// This is primarily intended for testing and advanced scenarios.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Config file doesn't exist
    /// - Failed to read file
    /// - TOML parsing fails
    /// - A timing value is out of range
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Configuration file not found at: {}", path.display());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to the standard location, creating the config directory
    /// if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Check that every timing value is inside its documented range
    pub fn validate(&self) -> Result<()> {
        if !(ADVANCE_INTERVAL_MIN_SECS..=ADVANCE_INTERVAL_MAX_SECS)
            .contains(&self.advance_interval_secs)
        {
            anyhow::bail!(
                "advance_interval_secs must be {}-{} (got {})",
                ADVANCE_INTERVAL_MIN_SECS,
                ADVANCE_INTERVAL_MAX_SECS,
                self.advance_interval_secs
            );
        }
        if !(TRANSITION_MIN_MS..=TRANSITION_MAX_MS).contains(&self.transition_ms) {
            anyhow::bail!(
                "transition_ms must be {}-{} (got {})",
                TRANSITION_MIN_MS,
                TRANSITION_MAX_MS,
                self.transition_ms
            );
        }
        Ok(())
    }
}
