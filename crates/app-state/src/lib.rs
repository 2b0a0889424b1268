//! Application state for Love Quotes
//!
//! This crate holds the state shared across screens (the current selection)
//! and the application configuration loaded at launch.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod selection;

pub use config::{AppConfig, ConfigError};
pub use selection::{SelectionContext, DEFAULT_CATEGORY, DEFAULT_IMAGE_REFERENCE};
