//! Core value types and collaborator interfaces for Love Quotes
//!
//! This crate contains the stateless building blocks shared by the media
//! and UI layers: hex colors, 2D geometry, and the content interfaces
//! (database, messages, quotes) that screens consume.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod content;
pub mod geometry;

pub use color::Color;
pub use content::{DatabaseHelper, InMemoryLibrary, MessagesManager, QuotesManager};
pub use geometry::{GeometryError, Point, Rect, Size};
