//! # patternscope
//!
//! Overlay geometry and pattern taxonomy.
//!
//! A detection pipeline hands this crate a pattern type label and a set of
//! anchor points normalized to the image content area; it hands back SVG
//! path data plus the decorative attributes (dash spec, fill opacity) the
//! overlay renderer draws verbatim. A second, smaller surface collapses
//! free-form classifier labels into the closed [`PatternType`] taxonomy so
//! the rest of the app never observes an out-of-taxonomy value.
//!
//! Everything here is pure and synchronous: no I/O, no shared state, safe
//! to call from any thread.

pub mod geometry;
pub mod measurements;
pub mod path;
pub mod record;
pub mod shapes;
pub mod taxonomy;

// Re-export common types at crate root for convenience.
pub use geometry::{AnchorPoint, Point, Viewport};
pub use measurements::{MeasureValue, Measurements, DEFAULT_GOLDEN_RATIO};
pub use path::PathBuilder;
pub use record::{Overlay, PatternRecord, PatternSource};
pub use shapes::{dash_pattern, fill_opacity, generate_path, ShapeClass};
pub use taxonomy::{normalize, PatternType};
