//! Application configuration
//!
//! Configuration is a JSON file with camelCase keys. Every key is optional;
//! a missing file yields the defaults.
//!
//! ```json
//! {
//!   "initialCategory": "Romance",
//!   "assetDirectory": "bundle/quotes",
//!   "jpegQuality": 0.7,
//!   "base64LineLength": 76,
//!   "logFilter": "love_quotes=debug,info"
//! }
//! ```

use app_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::selection::{SelectionContext, DEFAULT_CATEGORY, DEFAULT_IMAGE_REFERENCE};

/// Toolbar color used for the status bar of the messages list
pub const DEFAULT_TOOLBAR_COLOR: &str = "#B3134C";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Launch-time configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Category selected at launch
    pub initial_category: String,

    /// Image reference selected at launch
    pub placeholder_image_reference: String,

    /// Directory holding bundled image assets
    pub asset_directory: PathBuf,

    /// Quality for lossy image export, 0 to 1
    pub jpeg_quality: f64,

    /// Wrap exported base64 at this many characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_line_length: Option<usize>,

    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Status bar color of the messages list
    pub toolbar_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_category: DEFAULT_CATEGORY.to_string(),
            placeholder_image_reference: DEFAULT_IMAGE_REFERENCE.to_string(),
            asset_directory: PathBuf::from("assets"),
            jpeg_quality: 0.85,
            base64_line_length: None,
            log_filter: "info".to_string(),
            toolbar_color: Color::from_hex(DEFAULT_TOOLBAR_COLOR),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut config: Self = serde_json::from_str(&contents)?;
        config.normalize();
        Ok(config)
    }

    /// Load configuration, using defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Write configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Set the asset directory
    pub fn with_asset_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_directory = dir.into();
        self
    }

    /// Set the export JPEG quality
    pub fn with_jpeg_quality(mut self, quality: f64) -> Self {
        self.jpeg_quality = quality;
        self.normalize();
        self
    }

    /// The selection the app starts with
    pub fn initial_selection(&self) -> SelectionContext {
        SelectionContext::new(
            self.initial_category.clone(),
            self.placeholder_image_reference.clone(),
        )
    }

    fn normalize(&mut self) {
        if !(0.0..=1.0).contains(&self.jpeg_quality) {
            let clamped = if self.jpeg_quality.is_nan() {
                0.85
            } else {
                self.jpeg_quality.clamp(0.0, 1.0)
            };
            tracing::warn!(
                configured = self.jpeg_quality,
                using = clamped,
                "jpegQuality out of range"
            );
            self.jpeg_quality = clamped;
        }
    }
}
