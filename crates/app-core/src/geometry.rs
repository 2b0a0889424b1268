//! 2D geometry for layout and image editing
//!
//! Points, sizes and rectangles in `f64`, with the vector arithmetic the
//! editing screens use for dragging, scaling and rotating images.
//!
//! A [`Size`] doubles as a displacement vector: `Point - Point` yields a
//! `Size`, and a `Size` can be added to a `Point`.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::ops::{Add, Div, Mul, Sub};
use thiserror::Error;

/// Errors from geometry computations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A divisor dimension was zero
    #[error("Invalid dimension: {width}x{height} has a zero side")]
    InvalidDimension {
        /// Offending width
        width: f64,
        /// Offending height
        height: f64,
    },
}

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;

// =============================================================================
// Point
// =============================================================================

/// A position in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// The origin
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Size;

    fn sub(self, rhs: Point) -> Size {
        Size::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Point {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl Sub<Size> for Point {
    type Output = Point;

    fn sub(self, rhs: Size) -> Point {
        Point::new(self.x - rhs.width, self.y - rhs.height)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

// =============================================================================
// Size
// =============================================================================

/// A width/height pair, also used as a displacement vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// The empty size
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of an area of this size placed at the origin
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Check if either side is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// The larger of the per-axis ratios `self / target`
    ///
    /// This is the aspect-fill scale: scaling `target` by it covers `self`.
    pub fn max_ratio(&self, target: Size) -> Result<f64> {
        let (w, h) = self.ratios(target)?;
        Ok(w.max(h))
    }

    /// The smaller of the per-axis ratios `self / target`
    ///
    /// This is the aspect-fit scale: scaling `target` by it fits inside `self`.
    pub fn min_ratio(&self, target: Size) -> Result<f64> {
        let (w, h) = self.ratios(target)?;
        Ok(w.min(h))
    }

    /// Scale that makes `self` cover `container`
    pub fn aspect_fill_scale(&self, container: Size) -> Result<f64> {
        container.max_ratio(*self)
    }

    /// Scale that makes `self` fit inside `container`
    pub fn aspect_fit_scale(&self, container: Size) -> Result<f64> {
        container.min_ratio(*self)
    }

    fn ratios(&self, target: Size) -> Result<(f64, f64)> {
        if target.is_empty() {
            return Err(GeometryError::InvalidDimension {
                width: target.width,
                height: target.height,
            });
        }
        Ok((self.width / target.width, self.height / target.height))
    }

    /// Rotate this vector by `radians` around `center`
    pub fn rotated_vector(&self, radians: f64, center: Size) -> Size {
        let (sin, cos) = radians.sin_cos();
        let dx = self.width - center.width;
        let dy = self.height - center.height;

        Size::new(
            dx * cos - dy * sin + center.width,
            dx * sin + dy * cos + center.height,
        )
    }

    /// Rotate this vector by `radians` around the origin
    pub fn rotated_vector_about_origin(&self, radians: f64) -> Size {
        self.rotated_vector(radians, Size::ZERO)
    }

    /// Negate the width
    pub fn reverse_width(&self) -> Size {
        Size::new(-self.width, self.height)
    }

    /// Negate the height
    pub fn reverse_height(&self) -> Size {
        Size::new(self.width, -self.height)
    }

    /// Negate both components
    pub fn reverse_both(&self) -> Size {
        Size::new(-self.width, -self.height)
    }

    /// Bounding box of a rectangle of this size rotated by `radians`, floored
    ///
    /// Flooring strips the tiny float residue trigonometry leaves behind, so
    /// a quarter turn of 100x50 is exactly 50x100.
    pub fn rotated_bounds(&self, radians: f64) -> Size {
        let (sin, cos) = radians.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());

        Size::new(
            (self.width * cos + self.height * sin).floor(),
            (self.width * sin + self.height * cos).floor(),
        )
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul<f64> for Size {
    type Output = Size;

    fn mul(self, rhs: f64) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

impl Div<f64> for Size {
    type Output = Size;

    fn div(self, rhs: f64) -> Size {
        Size::new(self.width / rhs, self.height / rhs)
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    /// Extent
    pub size: Size,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` at the origin
    pub const fn from_size(size: Size) -> Self {
        Self::new(Point::ZERO, size)
    }

    /// Smallest x
    pub fn min_x(&self) -> f64 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    /// Smallest y
    pub fn min_y(&self) -> f64 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    /// Largest x
    pub fn max_x(&self) -> f64 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    /// Largest y
    pub fn max_y(&self) -> f64 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    /// Horizontal midpoint
    pub fn mid_x(&self) -> f64 {
        (self.min_x() + self.max_x()) / 2.0
    }

    /// Vertical midpoint
    pub fn mid_y(&self) -> f64 {
        (self.min_y() + self.max_y()) / 2.0
    }

    /// The midpoint of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }
}

// =============================================================================
// Angles
// =============================================================================

/// Normalize an angle into `[0, 2π)` and convert it to degrees
///
/// Rounding can land exactly on a full turn for inputs a hair below zero or
/// below `2π`; those fold back to zero.
pub fn angle_degrees(radians: f64) -> f64 {
    let degrees = radians.rem_euclid(TAU).to_degrees();
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_size_close(actual: Size, expected: Size) {
        assert!(
            (actual.width - expected.width).abs() < 1e-9
                && (actual.height - expected.height).abs() < 1e-9,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(4.0, 5.0);

        assert_eq!(a - b, Size::new(6.0, 15.0));
        assert_eq!(a + Size::new(1.0, 2.0), Point::new(11.0, 22.0));
        assert_eq!(a - Size::new(1.0, 2.0), Point::new(9.0, 18.0));
        assert_eq!(a * 2.0, Point::new(20.0, 40.0));
        assert_eq!(a / 2.0, Point::new(5.0, 10.0));
    }

    #[test]
    fn test_size_arithmetic() {
        let a = Size::new(10.0, 20.0);
        let b = Size::new(1.0, 2.0);

        assert_eq!(a + b, Size::new(11.0, 22.0));
        assert_eq!(a - b, Size::new(9.0, 18.0));
        assert_eq!(a * 0.5, Size::new(5.0, 10.0));
        assert_eq!(a / 4.0, Size::new(2.5, 5.0));
    }

    #[test]
    fn test_centers() {
        assert_eq!(Size::new(200.0, 100.0).center(), Point::new(100.0, 50.0));

        let rect = Rect::new(Point::new(10.0, 10.0), Size::new(20.0, 40.0));
        assert_eq!(rect.center(), Point::new(20.0, 30.0));

        // Negative extents still have a well-defined midpoint
        let flipped = Rect::new(Point::new(10.0, 10.0), Size::new(-20.0, -40.0));
        assert_eq!(flipped.center(), Point::new(0.0, -10.0));
    }

    #[test]
    fn test_ratios() {
        let image = Size::new(200.0, 100.0);
        let target = Size::new(100.0, 100.0);

        assert_eq!(image.max_ratio(target).unwrap(), 2.0);
        assert_eq!(image.min_ratio(target).unwrap(), 1.0);
    }

    #[test]
    fn test_ratio_zero_dimension() {
        let image = Size::new(200.0, 100.0);

        assert!(matches!(
            image.max_ratio(Size::new(0.0, 100.0)),
            Err(GeometryError::InvalidDimension { .. })
        ));
        assert!(image.min_ratio(Size::new(100.0, 0.0)).is_err());
        assert!(image.min_ratio(Size::ZERO).is_err());
    }

    #[test]
    fn test_aspect_scales() {
        let image = Size::new(400.0, 200.0);
        let container = Size::new(100.0, 100.0);

        assert_eq!(image.aspect_fill_scale(container).unwrap(), 0.5);
        assert_eq!(image.aspect_fit_scale(container).unwrap(), 0.25);
        assert!(Size::ZERO.aspect_fill_scale(container).is_err());
    }

    #[test]
    fn test_rotated_vector_identity() {
        let size = Size::new(3.0, 4.0);
        for center in [Size::ZERO, Size::new(1.0, 1.0), Size::new(-7.5, 12.0)] {
            assert_size_close(size.rotated_vector(0.0, center), size);
        }
    }

    #[test]
    fn test_rotated_vector_quarter_turn() {
        let size = Size::new(1.0, 0.0);
        assert_size_close(size.rotated_vector_about_origin(FRAC_PI_2), Size::new(0.0, 1.0));

        // Around (1, 1): (2, 1) -> (1, 2)
        assert_size_close(
            Size::new(2.0, 1.0).rotated_vector(FRAC_PI_2, Size::new(1.0, 1.0)),
            Size::new(1.0, 2.0),
        );
    }

    #[test]
    fn test_reverse() {
        let size = Size::new(3.0, -4.0);
        assert_eq!(size.reverse_width(), Size::new(-3.0, -4.0));
        assert_eq!(size.reverse_height(), Size::new(3.0, 4.0));
        assert_eq!(size.reverse_both(), Size::new(-3.0, 4.0));
    }

    #[test]
    fn test_angle_degrees() {
        assert!((angle_degrees(PI) - 180.0).abs() < 1e-9);
        assert!((angle_degrees(FRAC_PI_2 + TAU) - 90.0).abs() < 1e-9);
        assert!((angle_degrees(-FRAC_PI_2) - 270.0).abs() < 1e-9);
        assert_eq!(angle_degrees(0.0), 0.0);
        assert!(angle_degrees(TAU) < 360.0);
    }

    #[test]
    fn test_angle_degrees_stays_below_full_turn() {
        let below_turn = f64::from_bits(TAU.to_bits() - 1);
        for radians in [-1e-20, -f64::EPSILON, -f64::MIN_POSITIVE, below_turn, TAU, -TAU] {
            let degrees = angle_degrees(radians);
            assert!((0.0..360.0).contains(&degrees), "{} -> {}", radians, degrees);
        }
    }

    #[test]
    fn test_rotated_bounds() {
        let size = Size::new(100.0, 50.0);

        assert_eq!(size.rotated_bounds(0.0), Size::new(100.0, 50.0));
        assert_eq!(size.rotated_bounds(FRAC_PI_2), Size::new(50.0, 100.0));
        assert_eq!(size.rotated_bounds(PI), Size::new(100.0, 50.0));

        // 45 degrees: (100 + 50) * cos(45) = 106.066...
        assert_eq!(size.rotated_bounds(PI / 4.0), Size::new(106.0, 106.0));
    }

    #[test]
    fn test_rect_from_size() {
        let rect = Rect::from_size(Size::new(40.0, 10.0));

        assert_eq!((rect.min_x(), rect.min_y()), (0.0, 0.0));
        assert_eq!((rect.max_x(), rect.max_y()), (40.0, 10.0));
        assert_eq!(rect.center(), Point::new(20.0, 5.0));
    }
}
