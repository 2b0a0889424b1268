//! User interface layer for Love Quotes
//!
//! This crate decides which full-screen view is shown and what it
//! receives. It does not draw anything; hosts render the
//! [`router::RenderedScreen`] descriptor with their own toolkit.
//!
//! # Modules
//!
//! - [`navigation`] - Screen catalog, transition table, navigation state
//! - [`router`] - Router owning state and collaborators, rendering descriptors
//! - [`services`] - Collaborators handed to screens
//! - [`theme`] - Color scheme and per-screen chrome
//!
//! # Example
//!
//! ```rust
//! use app_core::InMemoryLibrary;
//! use app_state::AppConfig;
//! use app_ui::{AppServices, NavigationRouter, Screen};
//! use media_processing::MemoryAssets;
//!
//! let services = AppServices::in_memory(InMemoryLibrary::new(), MemoryAssets::new());
//! let mut router = NavigationRouter::new(services, &AppConfig::default());
//! assert_eq!(router.render().screen, Screen::Home);
//!
//! router.navigate(Screen::Settings);
//! assert_eq!(router.render().screen, Screen::Settings);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod router;
pub mod services;
pub mod theme;

// Re-export commonly used types
pub use navigation::{HomePanel, NavigationFlags, NavigationState, Screen};
pub use router::{NavigationRouter, RenderedScreen, ScreenBody};
pub use services::AppServices;
pub use theme::{palette, ColorScheme, ScreenChrome, Theme};
