//! Media processing for Love Quotes
//!
//! This crate handles the image side of the app: format sniffing, base64
//! payload decoding and encoding, resolution of selection strings into
//! bitmaps, and the transforms the editor applies (rotation, center crop).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assets;
pub mod codec;
pub mod format;
pub mod transform;

use app_core::GeometryError;
use thiserror::Error;

pub use assets::{AssetCatalog, DirectoryAssets, MemoryAssets};
pub use codec::{Base64Layout, ImageBlob, ImageCodec};
pub use format::ImageFormat;

/// Errors that can occur during media operations
#[derive(Debug, Error)]
pub enum MediaError {
    /// Image decoding error
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    /// Image encoding error
    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    /// A transform would produce a canvas with no pixels
    #[error("Empty canvas: {width}x{height}")]
    EmptyCanvas {
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result type for media operations
pub type Result<T> = std::result::Result<T, MediaError>;
