//! Image format sniffing
//!
//! Classification looks at the first byte only. It is a coarse heuristic,
//! not a signature check: any buffer starting with `0xFF` is called JPEG.

use serde::{Deserialize, Serialize};

const PNG_LEAD: u8 = 0x89;
const JPEG_LEAD: u8 = 0xFF;
const GIF_LEAD: u8 = 0x47;
const TIFF_LEAD_INTEL: u8 = 0x49;
const TIFF_LEAD_MOTOROLA: u8 = 0x4D;

/// Image container format guessed from leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageFormat {
    /// Not recognized
    #[default]
    Unknown,
    /// PNG
    Png,
    /// JPEG
    Jpeg,
    /// GIF
    Gif,
    /// TIFF (either byte order)
    Tiff,
}

impl ImageFormat {
    /// Classify a format from the first byte of its data
    pub fn classify(first_byte: u8) -> Self {
        match first_byte {
            PNG_LEAD => Self::Png,
            JPEG_LEAD => Self::Jpeg,
            GIF_LEAD => Self::Gif,
            TIFF_LEAD_INTEL | TIFF_LEAD_MOTOROLA => Self::Tiff,
            _ => Self::Unknown,
        }
    }

    /// Classify a buffer; empty buffers are [`ImageFormat::Unknown`]
    pub fn sniff(bytes: &[u8]) -> Self {
        bytes.first().copied().map(Self::classify).unwrap_or_default()
    }

    /// Get the MIME type for this format
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Png => Some("image/png"),
            Self::Jpeg => Some("image/jpeg"),
            Self::Gif => Some("image/gif"),
            Self::Tiff => Some("image/tiff"),
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Png => Some("png"),
            Self::Jpeg => Some("jpg"),
            Self::Gif => Some("gif"),
            Self::Tiff => Some("tiff"),
        }
    }
}
