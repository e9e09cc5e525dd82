//! Closed polygon path generation for the closed-shape pattern types.

use crate::geometry::{AnchorPoint, Viewport};
use crate::path::PathBuilder;

/// Generate a closed path connecting the anchors in order.
///
/// Used for `geometric`, `symmetry` and `sacred_geometry` overlays. Needs
/// at least three anchors; fewer produce an empty string. Larger anchor
/// lists are connected exactly as given.
pub fn generate_polygon_path(anchors: &[AnchorPoint], viewport: Viewport) -> String {
    if anchors.len() < 3 {
        return String::new();
    }

    let mut path = PathBuilder::new();
    path.move_to(anchors[0].to_pixels(viewport));
    for anchor in &anchors[1..] {
        path.line_to(anchor.to_pixels(viewport));
    }
    path.close();
    path.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(100.0, 100.0)
    }

    #[test]
    fn triangle_closes_back_to_start() {
        let anchors = [
            AnchorPoint::new(10.0, 10.0),
            AnchorPoint::new(90.0, 10.0),
            AnchorPoint::new(50.0, 80.0),
        ];
        let path = generate_polygon_path(&anchors, viewport());
        assert_eq!(path, "M 10 10 L 90 10 L 50 80 Z");
    }

    #[test]
    fn three_point_commands_then_close() {
        let anchors = [
            AnchorPoint::new(10.0, 10.0),
            AnchorPoint::new(90.0, 10.0),
            AnchorPoint::new(50.0, 80.0),
        ];
        let path = generate_polygon_path(&anchors, viewport());
        let points = path.matches('M').count() + path.matches('L').count();
        assert_eq!(points, 3);
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn two_anchors_degrade_to_empty() {
        let anchors = [AnchorPoint::new(10.0, 10.0), AnchorPoint::new(90.0, 10.0)];
        assert_eq!(generate_polygon_path(&anchors, viewport()), "");
    }

    #[test]
    fn many_anchors_connect_as_given() {
        // No resampling for counts beyond the usual small shapes.
        let anchors: Vec<AnchorPoint> = (0..50)
            .map(|i| AnchorPoint::new((i % 10) as f64 * 10.0, (i / 10) as f64 * 20.0))
            .collect();
        let path = generate_polygon_path(&anchors, viewport());
        assert_eq!(path.matches('L').count(), 49);
        assert!(path.ends_with('Z'));
    }
}
