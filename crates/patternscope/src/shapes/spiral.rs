//! Golden-spiral path generation.
//!
//! Approximates logarithmic-spiral growth with four quarter-turn circular
//! arcs: the radius is multiplied by the growth constant once per quarter
//! turn, so each arc is a circle segment rather than a true log-spiral
//! section. The fixed four-arc form is intentional - it is the overlay the
//! detector was tuned against, not a resolution knob.

use std::f64::consts::FRAC_PI_2;

use crate::geometry::{AnchorPoint, Point, Viewport};
use crate::measurements::Measurements;
use crate::path::PathBuilder;

/// Radius in pixels when a detection supplies only the center anchor.
const FALLBACK_RADIUS: f64 = 20.0;

/// Quarter-turn arcs per spiral (one full revolution).
const ARC_COUNT: usize = 4;

/// Generate the spiral path for a `fibonacci` pattern.
///
/// The first anchor is the spiral center. The starting radius is one third
/// of the pixel-space distance to the second anchor when present, else
/// [`FALLBACK_RADIUS`]. The growth constant comes from the `golden_ratio`
/// measurement (default 1.618). Returns an empty string when no anchors
/// are given.
pub fn generate_spiral_path(
    anchors: &[AnchorPoint],
    measurements: &Measurements,
    viewport: Viewport,
) -> String {
    let Some(first) = anchors.first() else {
        return String::new();
    };
    let center = first.to_pixels(viewport);

    let mut radius = match anchors.get(1) {
        Some(second) => center.distance(second.to_pixels(viewport)) / 3.0,
        None => FALLBACK_RADIUS,
    };
    let growth = measurements.golden_ratio();

    // Start at the bottom of the first turn (angle pi/2, SVG y-down).
    let mut angle = FRAC_PI_2;
    let mut path = PathBuilder::new();
    path.move_to(point_on_circle(center, radius, angle));

    for _ in 0..ARC_COUNT {
        radius *= growth;
        angle += FRAC_PI_2;
        path.arc_to(radius, false, true, point_on_circle(center, radius, angle));
    }

    path.finish()
}

#[inline]
fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
