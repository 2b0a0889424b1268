//! Base64 image payloads
//!
//! Selected images travel between screens as strings. A string is either an
//! inline base64 payload or the name of a bundled asset, with nothing to
//! tell them apart. [`ImageCodec::resolve`] settles it by trial: decode as
//! base64 first, fall back to an asset lookup second.
//!
//! Decoding is permissive and silent. Characters outside the base64
//! alphabet are dropped, padding is optional, and any failure yields `None`
//! rather than an error.

use app_core::Size;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat as CodecFormat};
use std::io::Cursor;
use std::sync::Arc;

use crate::assets::AssetCatalog;
use crate::format::ImageFormat;
use crate::{MediaError, Result};

/// Default JPEG quality for lossy encoding
pub const DEFAULT_JPEG_QUALITY: f64 = 0.85;

/// Decoder that accepts missing padding and stray trailing bits
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// A decoded bitmap
///
/// Blobs are never edited in place; transforms return a new blob.
#[derive(Debug, Clone)]
pub struct ImageBlob {
    image: DynamicImage,
    source_format: ImageFormat,
}

impl ImageBlob {
    /// Decode a blob from encoded image bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image =
            image::load_from_memory(bytes).map_err(|e| MediaError::DecodeError(e.to_string()))?;

        Ok(Self {
            image,
            source_format: ImageFormat::sniff(bytes),
        })
    }

    /// Wrap an already decoded image
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image,
            source_format: ImageFormat::Unknown,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel dimensions as a geometry size
    pub fn size(&self) -> Size {
        let (width, height) = self.image.dimensions();
        Size::new(width as f64, height as f64)
    }

    /// Format of the bytes this blob was decoded from
    pub fn source_format(&self) -> ImageFormat {
        self.source_format
    }

    /// Borrow the decoded image
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Take the decoded image
    pub fn into_inner(self) -> DynamicImage {
        self.image
    }
}

/// Line layout of encoded base64 text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base64Layout {
    /// One unbroken line
    #[default]
    Unwrapped,
    /// Lines of at most this many characters, separated by `\n`
    Wrapped(usize),
}

impl Base64Layout {
    /// Layout from an optional configured line length
    pub fn from_line_length(line_length: Option<usize>) -> Self {
        match line_length {
            Some(len) if len > 0 => Self::Wrapped(len),
            _ => Self::Unwrapped,
        }
    }

    fn apply(&self, encoded: String) -> String {
        match *self {
            Self::Unwrapped => encoded,
            Self::Wrapped(len) => encoded
                .as_bytes()
                .chunks(len)
                // base64 output is ASCII, chunking bytes never splits a char
                .map(|line| String::from_utf8_lossy(line))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Converts between base64 text and decoded images
#[derive(Debug, Clone, Default)]
pub struct ImageCodec {
    layout: Base64Layout,
}

impl ImageCodec {
    /// Create a codec producing unwrapped base64
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encoded output layout
    pub fn with_layout(mut self, layout: Base64Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Get the encoded output layout
    pub fn layout(&self) -> Base64Layout {
        self.layout
    }

    /// Decode base64 text into an image
    ///
    /// Characters outside the base64 alphabet (line breaks, spaces, stray
    /// punctuation) are ignored.
    pub fn decode(&self, text: &str) -> Option<ImageBlob> {
        let filtered: String = text.chars().filter(|c| is_base64_char(*c)).collect();

        let bytes = match LENIENT.decode(filtered.as_bytes()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "base64 decode failed");
                return None;
            }
        };

        match ImageBlob::from_bytes(&bytes) {
            Ok(blob) => Some(blob),
            Err(e) => {
                tracing::debug!(error = %e, len = bytes.len(), "payload is not an image");
                None
            }
        }
    }

    /// Encode losslessly (PNG) as base64
    pub fn encode_lossless(&self, blob: &ImageBlob) -> Option<String> {
        let mut output = Vec::new();
        if let Err(e) = blob
            .as_dynamic()
            .write_to(&mut Cursor::new(&mut output), CodecFormat::Png)
        {
            tracing::debug!(error = %e, "PNG encoding failed");
            return None;
        }

        Some(self.encode_bytes(&output))
    }

    /// Encode lossily (JPEG) as base64
    ///
    /// `quality` runs from 0 (smallest) to 1 (best) and is clamped to that
    /// range. Alpha is dropped.
    pub fn encode_lossy(&self, blob: &ImageBlob, quality: f64) -> Option<String> {
        let mut output = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut output, jpeg_quality(quality));
        let rgb = DynamicImage::ImageRgb8(blob.as_dynamic().to_rgb8());

        if let Err(e) = rgb.write_with_encoder(encoder) {
            tracing::debug!(error = %e, "JPEG encoding failed");
            return None;
        }

        Some(self.encode_bytes(&output))
    }

    /// Resolve a selection string into an image
    ///
    /// Inline base64 takes priority; only when it does not decode is the
    /// string looked up as a bundled asset name.
    pub fn resolve(&self, reference: &str, assets: &dyn AssetCatalog) -> Option<ImageBlob> {
        if let Some(blob) = self.decode(reference) {
            return Some(blob);
        }

        let bytes = assets.load(reference)?;
        match ImageBlob::from_bytes(&bytes) {
            Ok(blob) => Some(blob),
            Err(e) => {
                tracing::warn!(asset = reference, error = %e, "bundled asset is not a decodable image");
                None
            }
        }
    }

    /// Resolve on the blocking thread pool
    ///
    /// Decoding large payloads can take a while; this keeps the calling
    /// task free while it runs.
    pub async fn resolve_async(
        &self,
        reference: String,
        assets: Arc<dyn AssetCatalog>,
    ) -> Option<ImageBlob> {
        let codec = self.clone();
        match tokio::task::spawn_blocking(move || codec.resolve(&reference, assets.as_ref())).await
        {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!(error = %e, "image resolution task failed");
                None
            }
        }
    }

    fn encode_bytes(&self, bytes: &[u8]) -> String {
        self.layout.apply(STANDARD.encode(bytes))
    }
}

fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
}

/// Map a `[0, 1]` quality onto the encoder's `1..=100` scale
fn jpeg_quality(quality: f64) -> u8 {
    let scaled = (quality.clamp(0.0, 1.0) * 100.0).round();
    if scaled.is_nan() {
        return 1;
    }
    (scaled as u8).clamp(1, 100)
}
