//! Wave path generation - a cubic Bezier eased through the anchors.

use crate::geometry::{AnchorPoint, Point, Viewport};
use crate::path::PathBuilder;

/// Generate the wave path for a `wave` pattern.
///
/// Threads a cubic Bezier through every anchor in order. Each segment's
/// control points sit at one third and two thirds of the horizontal span
/// between consecutive anchors, pinned to the start and end anchor's own y,
/// which eases the curve into a horizontal S through the sequence.
///
/// Needs at least two anchors; fewer produce an empty string.
pub fn generate_wave_path(anchors: &[AnchorPoint], viewport: Viewport) -> String {
    if anchors.len() < 2 {
        return String::new();
    }

    let points: Vec<Point> = anchors.iter().map(|a| a.to_pixels(viewport)).collect();

    let mut path = PathBuilder::new();
    path.move_to(points[0]);

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let span = to.x - from.x;
        let c1 = Point::new(from.x + span / 3.0, from.y);
        let c2 = Point::new(from.x + span * 2.0 / 3.0, to.y);
        path.cubic_to(c1, c2, to);
    }

    path.finish()
}
