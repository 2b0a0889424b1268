//! Hex color parsing
//!
//! Colors arrive from content and configuration as hex strings. Two parsers
//! exist because two call sites sanitize differently:
//!
//! - [`Color::from_hex`] trims whitespace, strips one leading `#`, and
//!   dispatches on length (2 gray, 4 gray+alpha, 6 RGB, 8 RGBA).
//! - [`Color::from_hex_alphanumeric`] trims every non-alphanumeric character
//!   from both ends and always reads `RRGGBB`.
//!
//! Neither parser fails. Unsupported input degrades to opaque white for
//! [`Color::from_hex`] and to whatever prefix could be scanned for
//! [`Color::from_hex_alphanumeric`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An sRGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub red: f64,
    /// Green channel
    pub green: f64,
    /// Blue channel
    pub blue: f64,
    /// Alpha channel (1 is opaque)
    pub alpha: f64,
}

impl Color {
    /// Opaque white, the fallback for unparseable strings
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// Opaque black
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent black
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from float channels
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Create a gray color
    pub const fn gray(value: f64, alpha: f64) -> Self {
        Self::rgba(value, value, value, alpha)
    }

    /// Create a color from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(unit(r as u64), unit(g as u64), unit(b as u64), unit(a as u64))
    }

    /// Parse a hex string with optional leading `#`
    ///
    /// Odd-length input has its last character doubled, input longer than
    /// eight characters is cut to eight. Invalid digits end the scan early
    /// rather than failing, so `"#12zz56"` reads as `0x12` with RGB layout.
    ///
    /// ```rust
    /// use app_core::Color;
    ///
    /// assert_eq!(Color::from_hex("#FF0000"), Color::rgba(1.0, 0.0, 0.0, 1.0));
    /// assert_eq!(Color::from_hex("F"), Color::WHITE);
    /// assert_eq!(Color::from_hex(""), Color::WHITE);
    /// ```
    pub fn from_hex(hex: &str) -> Self {
        let trimmed = hex.trim();
        let mut digits: Vec<char> = trimmed.strip_prefix('#').unwrap_or(trimmed).chars().collect();

        if digits.len() % 2 != 0 {
            if let Some(&last) = digits.last() {
                digits.push(last);
            }
        }
        digits.truncate(8);

        let sanitized: String = digits.iter().collect();
        let value = scan_hex(&sanitized);

        match digits.len() {
            2 => Self::gray(unit(value & 0xFF), 1.0),
            4 => Self::gray(unit((value >> 8) & 0xFF), unit(value & 0xFF)),
            6 => Self::rgba(
                unit((value >> 16) & 0xFF),
                unit((value >> 8) & 0xFF),
                unit(value & 0xFF),
                1.0,
            ),
            8 => Self::rgba(
                unit((value >> 24) & 0xFF),
                unit((value >> 16) & 0xFF),
                unit((value >> 8) & 0xFF),
                unit(value & 0xFF),
            ),
            len => {
                tracing::debug!(input = hex, len, "unsupported hex color length, using white");
                Self::WHITE
            }
        }
    }

    /// Parse a hex string as `RRGGBB`, trimming non-alphanumerics from both ends
    ///
    /// Only the low 24 bits of the scanned value are used and alpha is
    /// always 1. Short input is therefore read as a small blue value, e.g.
    /// `"FF"` is `#0000FF`.
    pub fn from_hex_alphanumeric(hex: &str) -> Self {
        let sanitized = hex.trim_matches(|c: char| !c.is_alphanumeric());
        let value = scan_hex(sanitized);

        Self::rgba(
            unit((value & 0xFF0000) >> 16),
            unit((value & 0x00FF00) >> 8),
            unit(value & 0x0000FF),
            1.0,
        )
    }

    /// Channels as 8-bit values, rounded
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel8(self.red),
            channel8(self.green),
            channel8(self.blue),
            channel8(self.alpha),
        ]
    }

    /// Encode as `#RRGGBB`, dropping alpha
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Encode as `#RRGGBBAA`
    pub fn to_hex_with_alpha(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }

    /// Check if the color is fully opaque
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_with_alpha())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_with_alpha())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Ok(Self::from_hex(&hex))
    }
}

/// Scan leading hex digits the way a platform text scanner does
///
/// Leading whitespace is skipped and an optional `0x` prefix is accepted.
/// Scanning stops at the first non-hex character, and overflow saturates.
/// No digits at all scans as zero.
fn scan_hex(input: &str) -> u64 {
    let input = input.trim_start();
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u64, |acc, digit| acc.saturating_mul(16).saturating_add(digit as u64))
}

fn unit(byte: u64) -> f64 {
    byte as f64 / 255.0
}

fn channel8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
