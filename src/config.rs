//! Configuration file support for the termadapt CLI.
//!
//! The configuration file is located at `~/.termadapt/config.toml`:
//!
//! ```toml
//! # Force a specific adapter (optional)
//! adapter = "posix"
//!
//! # Force a specific charset (optional)
//! charset = "utf8"
//! ```
//!
//! Values are plain identifiers validated against the known adapter and
//! charset kinds before they ever reach the resolver; command-line flags
//! override the file.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Adapter identifier to force on first resolution
    pub adapter: Option<String>,
    /// Charset identifier to force on first resolution
    pub charset: Option<String>,
}

impl Config {
    /// Load configuration from file, falling back to defaults on any problem
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(&path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Overlay command-line values on top of the file; flags win
    pub fn overlaid(mut self, adapter: Option<String>, charset: Option<String>) -> Self {
        if adapter.is_some() {
            self.adapter = adapter;
        }
        if charset.is_some() {
            self.charset = charset;
        }
        self
    }

    /// Get config file path
    fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".termadapt").join("config.toml"))
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}
