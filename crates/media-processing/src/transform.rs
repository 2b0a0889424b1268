//! Image transforms used by the editor
//!
//! - [`rotate`] renders an image rotated about its center into a canvas
//!   just large enough to hold it
//! - [`center_cropped`] scales to fill a target size and crops the middle
//! - [`solid_image`] fills a canvas with a single color

use app_core::{Color, Point, Size};
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};

use crate::codec::ImageBlob;
use crate::{MediaError, Result};

/// Rotate an image by `radians` about its center
///
/// The canvas is the bounding box of the rotated image with each side
/// floored, so a near-exact quarter turn of 100x50 yields exactly 50x100.
/// Pixels outside the rotated image are transparent.
pub fn rotate(blob: &ImageBlob, radians: f64) -> Result<ImageBlob> {
    let source = blob.as_dynamic().to_rgba8();
    let bounds = blob.size().rotated_bounds(radians);
    let (width, height) = (bounds.width as u32, bounds.height as u32);

    if width == 0 || height == 0 {
        return Err(MediaError::EmptyCanvas { width, height });
    }

    let source_center = blob.size().center();
    let canvas_center = bounds.center();
    let mut canvas = RgbaImage::new(width, height);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        // Inverse-map the destination pixel center into the source
        let offset = Point::new(x as f64 + 0.5, y as f64 + 0.5) - canvas_center;
        let local = offset.rotated_vector_about_origin(-radians);
        let sample = source_center + local - Size::new(0.5, 0.5);

        if let Some(color) = sample_bilinear(&source, sample.x, sample.y) {
            *pixel = color;
        }
    }

    tracing::debug!(
        from = ?(blob.width(), blob.height()),
        to = ?(width, height),
        radians,
        "rotated image"
    );

    Ok(ImageBlob::from_dynamic(DynamicImage::ImageRgba8(canvas)))
}

/// Scale an image to cover `target` and crop the centered region
pub fn center_cropped(blob: &ImageBlob, target: Size) -> Result<ImageBlob> {
    let (width, height) = (target.width.floor() as u32, target.height.floor() as u32);
    if width == 0 || height == 0 {
        return Err(MediaError::EmptyCanvas { width, height });
    }

    let scale = blob.size().aspect_fill_scale(target)?;
    let scaled = blob.size() * scale;
    let (scaled_w, scaled_h) = (
        (scaled.width.ceil() as u32).max(width),
        (scaled.height.ceil() as u32).max(height),
    );

    let resized = blob
        .as_dynamic()
        .resize_exact(scaled_w, scaled_h, FilterType::Triangle);
    let x = (scaled_w - width) / 2;
    let y = (scaled_h - height) / 2;

    Ok(ImageBlob::from_dynamic(resized.crop_imm(x, y, width, height)))
}

/// A canvas of `size` filled with `color`
pub fn solid_image(color: Color, size: Size) -> Result<ImageBlob> {
    let (width, height) = (size.width.floor() as u32, size.height.floor() as u32);
    if width == 0 || height == 0 {
        return Err(MediaError::EmptyCanvas { width, height });
    }

    let canvas = RgbaImage::from_pixel(width, height, Rgba(color.to_rgba8()));
    Ok(ImageBlob::from_dynamic(DynamicImage::ImageRgba8(canvas)))
}

/// A single pixel of `color`
pub fn solid_pixel(color: Color) -> ImageBlob {
    let canvas = RgbaImage::from_pixel(1, 1, Rgba(color.to_rgba8()));
    ImageBlob::from_dynamic(DynamicImage::ImageRgba8(canvas))
}

/// Bilinear sample at continuous pixel coordinates
///
/// Coordinates are pixel centers; anything more than half a pixel outside
/// the image is `None`.
fn sample_bilinear(source: &RgbaImage, x: f64, y: f64) -> Option<Rgba<u8>> {
    let (w, h) = source.dimensions();
    let (max_x, max_y) = (w as f64 - 0.5, h as f64 - 0.5);
    if x < -0.5 || y < -0.5 || x > max_x || y > max_y {
        return None;
    }

    let x = x.clamp(0.0, (w - 1) as f64);
    let y = y.clamp(0.0, (h - 1) as f64);
    let (x0, y0) = (x.floor() as u32, y.floor() as u32);
    let (x1, y1) = ((x0 + 1).min(w - 1), (y0 + 1).min(h - 1));
    let (fx, fy) = (x - x0 as f64, y - y0 as f64);

    let p00 = source.get_pixel(x0, y0).0;
    let p10 = source.get_pixel(x1, y0).0;
    let p01 = source.get_pixel(x0, y1).0;
    let p11 = source.get_pixel(x1, y1).0;

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = p00[c] as f64 * (1.0 - fx) + p10[c] as f64 * fx;
        let bottom = p01[c] as f64 * (1.0 - fx) + p11[c] as f64 * fx;
        out[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0) as u8;
    }

    Some(Rgba(out))
}
