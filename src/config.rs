//! Expansion settings, with optional TOML loading
//!
//! ```toml
//! [expand]
//! indent_width = 4
//!
//! [lint]
//! enabled = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::template::directive::DEFAULT_INDENT_WIDTH;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration for a template expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Columns of indent inserted by the ` ^nl ` directive
    pub indent_width: usize,
    /// Collect lint warnings alongside the output
    pub lint: bool,
}

#[derive(Deserialize)]
struct TomlConfig {
    expand: Option<TomlExpand>,
    lint: Option<TomlLint>,
}

#[derive(Deserialize)]
struct TomlExpand {
    indent_width: Option<usize>,
}

#[derive(Deserialize)]
struct TomlLint {
    enabled: Option<bool>,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            lint: false,
        }
    }
}

impl ExpandConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixed indent width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enable or disable lint collection
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; absent keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(ExpandConfig {
            indent_width: parsed
                .expand
                .and_then(|e| e.indent_width)
                .unwrap_or(defaults.indent_width),
            lint: parsed
                .lint
                .and_then(|l| l.enabled)
                .unwrap_or(defaults.lint),
        })
    }
}
