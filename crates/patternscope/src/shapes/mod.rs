//! Path generators for each pattern shape class.
//!
//! Each generator is a pure function from anchors + viewport to SVG path
//! data. Underpopulated anchor lists degrade to an empty path instead of
//! erroring; anchor counts beyond the usual small shapes are connected as
//! given, with no resampling.

mod polygon;
mod polyline;
mod spiral;
mod wave;

pub use polygon::generate_polygon_path;
pub use polyline::generate_polyline_path;
pub use spiral::generate_spiral_path;
pub use wave::generate_wave_path;

use crate::geometry::{AnchorPoint, Viewport};
use crate::measurements::Measurements;

/// How a pattern type label renders.
///
/// The geometry layer dispatches on raw labels rather than the closed
/// taxonomy: records written under the wider pre-narrowing taxonomy still
/// carry labels like `wave` or `channel`, and those keep their shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    /// Fixed-resolution golden spiral (`fibonacci`).
    Spiral,
    /// Horizontally eased cubic curve through the anchors (`wave`).
    Wave,
    /// Closed polygon (`geometric`, `symmetry`, `sacred_geometry`).
    ClosedPolygon,
    /// Open polyline (`channel`, `pitchfork`, and any unknown label).
    Polyline,
}

impl ShapeClass {
    /// Classify a type label. Unknown labels render as open polylines.
    pub fn from_label(label: &str) -> ShapeClass {
        match label {
            "fibonacci" => ShapeClass::Spiral,
            "wave" => ShapeClass::Wave,
            "geometric" | "symmetry" | "sacred_geometry" => ShapeClass::ClosedPolygon,
            _ => ShapeClass::Polyline,
        }
    }

    /// Minimum anchors needed for a non-empty path.
    pub fn min_anchors(&self) -> usize {
        match self {
            ShapeClass::Spiral => 1,
            ShapeClass::Wave | ShapeClass::Polyline => 2,
            ShapeClass::ClosedPolygon => 3,
        }
    }
}

/// Generate SVG path data for a pattern type label.
///
/// Main entry point for overlay geometry. Returns an empty string when
/// `anchors` has fewer points than the label's shape class needs.
pub fn generate_path(
    label: &str,
    anchors: &[AnchorPoint],
    measurements: &Measurements,
    viewport: Viewport,
) -> String {
    match ShapeClass::from_label(label) {
        ShapeClass::Spiral => generate_spiral_path(anchors, measurements, viewport),
        ShapeClass::Wave => generate_wave_path(anchors, viewport),
        ShapeClass::ClosedPolygon => generate_polygon_path(anchors, viewport),
        ShapeClass::Polyline => generate_polyline_path(anchors, viewport),
    }
}

/// Stroke dash specification for a type label.
///
/// Only the open multi-point chart types draw dashed; everything else is a
/// solid stroke.
pub fn dash_pattern(label: &str) -> Option<&'static str> {
    match label {
        "channel" | "pitchfork" => Some("6,4"),
        _ => None,
    }
}

/// Fill opacity for a type label.
///
/// Closed shapes get a faint fill; open shapes are stroke-only.
pub fn fill_opacity(label: &str) -> f64 {
    match ShapeClass::from_label(label) {
        ShapeClass::ClosedPolygon => 0.15,
        _ => 0.0,
    }
}
