//! SVG path-data assembly.
//!
//! Builds path strings in the `M`/`L`/`C`/`A`/`Z` mini-language the overlay
//! renderer consumes. All coordinates are already in pixel space; the
//! renderer draws them verbatim without reinterpreting.

use std::fmt::Write;

use crate::geometry::Point;

/// Format a coordinate: two decimals, trailing zeros trimmed.
///
/// `0.0` prints as `0`, `33.333` as `33.33`, `50.0` as `50`. Keeps paths
/// compact and stable for exact string assertions.
pub(crate) fn fmt_coord(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let rounded = (v * 100.0).round() / 100.0;
    // Collapse negative zero so paths never print "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut s = format!("{rounded:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Incremental SVG path-data builder.
#[derive(Debug, Default)]
pub struct PathBuilder {
    data: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn sep(&mut self) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
    }

    /// `M x y` - start a new subpath.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.sep();
        let _ = write!(self.data, "M {} {}", fmt_coord(p.x), fmt_coord(p.y));
        self
    }

    /// `L x y` - straight segment.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.sep();
        let _ = write!(self.data, "L {} {}", fmt_coord(p.x), fmt_coord(p.y));
        self
    }

    /// `C c1x c1y, c2x c2y, x y` - cubic Bezier segment.
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.sep();
        let _ = write!(
            self.data,
            "C {} {}, {} {}, {} {}",
            fmt_coord(c1.x),
            fmt_coord(c1.y),
            fmt_coord(c2.x),
            fmt_coord(c2.y),
            fmt_coord(p.x),
            fmt_coord(p.y)
        );
        self
    }

    /// `A r r 0 large-arc sweep x y` - circular arc (rx equals ry, no
    /// x-axis rotation).
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, p: Point) -> &mut Self {
        self.sep();
        let r = fmt_coord(radius);
        let _ = write!(
            self.data,
            "A {} {} 0 {} {} {} {}",
            r,
            r,
            large_arc as u8,
            sweep as u8,
            fmt_coord(p.x),
            fmt_coord(p.y)
        );
        self
    }

    /// `Z` - close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.sep();
        self.data.push('Z');
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the builder, returning the path data string.
    pub fn finish(self) -> String {
        self.data
    }
}
