//! Controller configuration.
//!
//! [`ControllerConfig`] holds the presentation settings of the editing
//! controller: the size and caption of the "add row" button and the labels
//! of the row context menu. Every field has a default, so a configuration
//! file only needs to name what it overrides:
//!
//! ```toml
//! [add_row_button]
//! text = "New row"
//!
//! [context_menu]
//! delete_row = "Remove row"
//! ```

use std::path::{Path, PathBuf};

use horizon_grid_core::logging::targets;
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a controller configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("Invalid TOML config{}: {source}", display_path(.path))]
    Toml {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    /// JSON syntax or schema error.
    #[error("Invalid JSON config{}: {source}", display_path(.path))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}

/// Size and caption of the "add row" button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddRowButtonConfig {
    /// Button width in pixels.
    pub width: f32,
    /// Button height in pixels.
    pub height: f32,
    /// Button caption.
    pub text: String,
}

impl Default for AddRowButtonConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            text: "Add row".to_string(),
        }
    }
}

/// Labels of the row context menu entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextMenuConfig {
    pub insert_row_above: String,
    pub insert_row_below: String,
    pub delete_row: String,
}

impl Default for ContextMenuConfig {
    fn default() -> Self {
        Self {
            insert_row_above: "Insert row above".to_string(),
            insert_row_below: "Insert row below".to_string(),
            delete_row: "Delete row".to_string(),
        }
    }
}

/// Presentation settings for [`TableController`](crate::controller::TableController).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub add_row_button: AddRowButtonConfig,
    pub context_menu: ContextMenuConfig,
}

impl ControllerConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml { path: None, source })
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Json { path: None, source })
    }

    /// Loads a configuration from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = read_text(path)?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded TOML config");
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = read_text(path)?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded JSON config");
        Ok(config)
    }
}

fn read_text(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
