//! Pattern type taxonomy and label normalization.
//!
//! The set of canonical pattern categories narrowed over releases: early
//! builds shipped eight, the current taxonomy is four. Classifier labels
//! arrive as free-form strings and stored records may still carry retired
//! labels, so everything funnels through [`normalize`] before the rest of
//! the app sees it.

use serde::{Deserialize, Serialize};

/// The closed set of canonical pattern categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Fibonacci,
    Geometric,
    Symmetry,
    Custom,
}

impl PatternType {
    /// All current taxonomy members.
    pub fn all() -> &'static [PatternType] {
        &[
            PatternType::Fibonacci,
            PatternType::Geometric,
            PatternType::Symmetry,
            PatternType::Custom,
        ]
    }

    /// Get the taxonomy name as string.
    pub fn name(&self) -> &'static str {
        match self {
            PatternType::Fibonacci => "fibonacci",
            PatternType::Geometric => "geometric",
            PatternType::Symmetry => "symmetry",
            PatternType::Custom => "custom",
        }
    }

    /// Parse an exact taxonomy name. Unlike [`normalize`], unknown labels
    /// are not bucketed.
    pub fn from_name(name: &str) -> Option<PatternType> {
        match name {
            "fibonacci" => Some(PatternType::Fibonacci),
            "geometric" => Some(PatternType::Geometric),
            "symmetry" => Some(PatternType::Symmetry),
            "custom" => Some(PatternType::Custom),
            _ => None,
        }
    }

    /// True iff `label` exactly matches one of the taxonomy names.
    pub fn is_valid(label: &str) -> bool {
        PatternType::from_name(label).is_some()
    }

    /// One-line description for CLI listings.
    pub fn description(&self) -> &'static str {
        match self {
            PatternType::Fibonacci => "Logarithmic spirals and golden-ratio growth",
            PatternType::Geometric => "Grids, tessellations and polygonal motifs",
            PatternType::Symmetry => "Mirror, radial and rotational balance",
            PatternType::Custom => "Anything outside the canonical categories",
        }
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Keyword buckets for labels outside the taxonomy, checked in order.
// Elliott and wave motifs land in fibonacci: the motif is defined by
// Fibonacci ratios, and the retired `wave` category renders as a curve.
const FIBONACCI_HINTS: &[&str] = &["fibonacci", "spiral", "golden", "phi", "elliott", "wave"];
const GEOMETRIC_HINTS: &[&str] = &[
    "geometr", "grid", "tessellat", "polygon", "triangle", "hexagon", "fractal", "channel",
    "pitchfork", "wedge", "flag", "pennant",
];
const SYMMETRY_HINTS: &[&str] = &[
    "symmetr", "mirror", "bilateral", "radial", "rotational", "reflect", "balance", "mandala",
    "kaleidoscope",
];

/// Collapse a free-form classifier label into the current taxonomy.
///
/// Exact taxonomy names pass through unchanged. Anything else is bucketed
/// by keyword substring (case-insensitive), worst case [`PatternType::Custom`].
/// Never fails, for any input string.
pub fn normalize(label: &str) -> PatternType {
    if let Some(t) = PatternType::from_name(label) {
        return t;
    }

    let lower = label.trim().to_lowercase();
    let bucketed = if FIBONACCI_HINTS.iter().any(|k| lower.contains(k)) {
        Some(PatternType::Fibonacci)
    } else if GEOMETRIC_HINTS.iter().any(|k| lower.contains(k)) {
        Some(PatternType::Geometric)
    } else if SYMMETRY_HINTS.iter().any(|k| lower.contains(k)) {
        Some(PatternType::Symmetry)
    } else {
        None
    };

    match bucketed {
        Some(t) => {
            tracing::debug!(label, canonical = t.name(), "out-of-taxonomy label bucketed");
            t
        }
        None => {
            tracing::debug!(label, "unrecognized pattern label coerced to custom");
            PatternType::Custom
        }
    }
}
