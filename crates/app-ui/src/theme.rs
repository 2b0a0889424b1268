//! Screen chrome and theme
//!
//! Every screen renders in the dark color scheme. The messages list also
//! tints the status bar with the toolbar color.

use app_core::Color;
use app_state::AppConfig;
use serde::{Deserialize, Serialize};

use crate::navigation::Screen;

/// Brand colors
pub mod palette {
    /// Toolbar and status bar tint
    pub const TOOLBAR: &str = app_state::config::DEFAULT_TOOLBAR_COLOR;

    /// Screen background
    pub const BACKGROUND: &str = "#121212";

    /// Primary text on dark backgrounds
    pub const TEXT: &str = "#FFFFFF";
}

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light appearance
    Light,
    /// Dark appearance
    #[default]
    Dark,
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(format!("Unknown color scheme: {}", s)),
        }
    }
}

/// Appearance applied around a screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenChrome {
    /// Color scheme of the screen
    pub color_scheme: ColorScheme,
    /// Status bar tint, if the screen sets one
    pub status_bar: Option<Color>,
}

/// App-wide theme settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Scheme used by every screen
    pub color_scheme: ColorScheme,
    /// Toolbar tint
    pub toolbar_color: Color,
    /// Background color
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Dark,
            toolbar_color: Color::from_hex(palette::TOOLBAR),
            background: Color::from_hex(palette::BACKGROUND),
        }
    }
}

impl Theme {
    /// Theme using the configured toolbar color
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            toolbar_color: config.toolbar_color,
            ..Self::default()
        }
    }

    /// Chrome for a screen
    pub fn chrome_for(&self, screen: Screen) -> ScreenChrome {
        let status_bar = match screen {
            Screen::Messages => Some(self.toolbar_color),
            _ => None,
        };

        ScreenChrome {
            color_scheme: self.color_scheme,
            status_bar,
        }
    }
}
