//! Core geometry types: normalized anchors and pixel-space points.

use serde::{Deserialize, Serialize};

/// A pattern anchor in normalized image coordinates.
///
/// Each coordinate is a percentage of the image content area in `[0, 100]`,
/// independent of device pixel density. Anchors only become pixels when
/// scaled against an explicit [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub x: f64,
    pub y: f64,
}

impl AnchorPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale this anchor into pixel space.
    #[inline]
    pub fn to_pixels(&self, viewport: Viewport) -> Point {
        Point::new(
            self.x / 100.0 * viewport.width,
            self.y / 100.0 * viewport.height,
        )
    }
}

/// Pixel dimensions of the content area an overlay is rendered into.
///
/// Always passed explicitly; nothing in this crate reads screen dimensions
/// from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A 2D point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
