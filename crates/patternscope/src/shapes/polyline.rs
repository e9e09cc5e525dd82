//! Open polyline path generation.
//!
//! Covers the legacy chart types (`channel`, `pitchfork`) and doubles as
//! the fallback for unknown type labels.

use crate::geometry::{AnchorPoint, Viewport};
use crate::path::PathBuilder;

/// Generate an open path connecting the anchors in order, no closing
/// segment.
///
/// Needs at least two anchors; fewer produce an empty string.
pub fn generate_polyline_path(anchors: &[AnchorPoint], viewport: Viewport) -> String {
    if anchors.len() < 2 {
        return String::new();
    }

    let mut path = PathBuilder::new();
    path.move_to(anchors[0].to_pixels(viewport));
    for anchor in &anchors[1..] {
        path.line_to(anchor.to_pixels(viewport));
    }
    path.finish()
}
