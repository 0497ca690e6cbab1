//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/dir-weight/config.toml` (or the platform-specific
//! equivalent). A missing file means every default applies.
//!
//! # Example config
//!
//! ```toml
//! [traversal]
//! follow_symlinks = false
//!
//! [display]
//! color = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::{DisplayOptions, ScanOptions};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so that keys missing from the file fall back to
/// the hardcoded defaults.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Traversal options
    #[serde(default)]
    pub traversal: FileTraversalConfig,

    /// Display options
    #[serde(default)]
    pub display: FileDisplayConfig,
}

/// Traversal options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileTraversalConfig {
    /// Whether to follow symbolic links while measuring
    pub follow_symlinks: Option<bool>,
}

/// Display options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileDisplayConfig {
    /// Whether to colour the report
    pub color: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/dir-weight/config.toml`, where
    /// `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dir-weight").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }

    /// Resolve the traversal options, filling unset keys with defaults.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_follow_symlinks(self.traversal.follow_symlinks.unwrap_or(false))
    }

    /// Resolve the display options, filling unset keys with defaults.
    #[must_use]
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            color: self.display.color.unwrap_or(true),
        }
    }
}
