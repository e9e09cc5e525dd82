//! The stored pattern record and its overlay projection.
//!
//! Records are flat and self-contained - no foreign keys. The `type` field
//! always holds a current-taxonomy value: deserialization funnels whatever
//! string was stored through the normalizer, so records written under the
//! wider pre-narrowing taxonomy heal themselves on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::{AnchorPoint, Viewport};
use crate::measurements::Measurements;
use crate::shapes;
use crate::taxonomy::{self, PatternType};

/// Where a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternSource {
    Ai,
    Manual,
}

/// A detected or hand-entered pattern, as persisted by the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRecord {
    pub id: String,
    #[serde(rename = "type", deserialize_with = "normalized_type")]
    pub pattern_type: PatternType,
    /// Raw classifier label, kept verbatim for display and shape dispatch.
    pub subtype: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub anchors: Vec<AnchorPoint>,
    #[serde(default)]
    pub measurements: Measurements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    pub source: PatternSource,
    pub image_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_image_uri: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Read-time re-validation: stored type strings pass through the
/// normalizer instead of being trusted verbatim.
fn normalized_type<'de, D>(deserializer: D) -> Result<PatternType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    Ok(taxonomy::normalize(&label))
}

impl PatternRecord {
    /// Create a record from an AI detection result.
    ///
    /// The raw classifier label is collapsed into the taxonomy and kept
    /// verbatim as `subtype`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_detection(
        id: impl Into<String>,
        raw_label: &str,
        name: impl Into<String>,
        confidence: f64,
        anchors: Vec<AnchorPoint>,
        measurements: Measurements,
        image_uri: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            pattern_type: taxonomy::normalize(raw_label),
            subtype: raw_label.to_string(),
            name: name.into(),
            confidence: Some(confidence),
            anchors,
            measurements,
            insights: None,
            source: PatternSource::Ai,
            image_uri: image_uri.into(),
            edge_image_uri: None,
            created_at: now,
            updated_at: now,
            user_notes: None,
            tags: Vec::new(),
            is_favorite: false,
        }
    }

    /// Create a hand-entered record.
    pub fn manual(
        id: impl Into<String>,
        pattern_type: PatternType,
        name: impl Into<String>,
        anchors: Vec<AnchorPoint>,
        image_uri: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            pattern_type,
            subtype: pattern_type.name().to_string(),
            name: name.into(),
            confidence: None,
            anchors,
            measurements: Measurements::new(),
            insights: None,
            source: PatternSource::Manual,
            image_uri: image_uri.into(),
            edge_image_uri: None,
            created_at: now,
            updated_at: now,
            user_notes: None,
            tags: Vec::new(),
            is_favorite: false,
        }
    }

    /// Flip the favorite flag.
    pub fn toggle_favorite(&mut self, now: DateTime<Utc>) {
        self.is_favorite = !self.is_favorite;
        self.touch(now);
    }

    /// Replace the user notes.
    pub fn set_notes(&mut self, notes: impl Into<String>, now: DateTime<Utc>) {
        self.user_notes = Some(notes.into());
        self.touch(now);
    }

    /// Replace the tag list.
    pub fn set_tags(&mut self, tags: Vec<String>, now: DateTime<Utc>) {
        self.tags = tags;
        self.touch(now);
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    /// Label used for shape dispatch.
    ///
    /// Legacy shape-bearing subtypes keep their legacy geometry; everything
    /// else renders by canonical type.
    pub fn shape_label(&self) -> &str {
        match self.subtype.as_str() {
            "wave" | "channel" | "pitchfork" | "sacred_geometry" => &self.subtype,
            _ => self.pattern_type.name(),
        }
    }

    /// Project this record into its renderable overlay.
    pub fn overlay(&self, viewport: Viewport) -> Overlay {
        let label = self.shape_label();
        Overlay {
            path: shapes::generate_path(label, &self.anchors, &self.measurements, viewport),
            dash_pattern: shapes::dash_pattern(label),
            fill_opacity: shapes::fill_opacity(label),
        }
    }
}

/// Everything the vector renderer needs for one pattern.
///
/// Coordinates in `path` are already scaled to the viewport; the renderer
/// draws all three fields verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_pattern: Option<&'static str>,
    pub fill_opacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    fn t1() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 10, 30, 0).unwrap()
    }

    fn triangle_anchors() -> Vec<AnchorPoint> {
        vec![
            AnchorPoint::new(10.0, 10.0),
            AnchorPoint::new(90.0, 10.0),
            AnchorPoint::new(50.0, 80.0),
        ]
    }

    #[test]
    fn detection_normalizes_label_and_keeps_subtype() {
        let record = PatternRecord::from_detection(
            "p1",
            "golden_spiral",
            "Sunflower head",
            0.92,
            vec![AnchorPoint::new(50.0, 50.0)],
            Measurements::new(),
            "file:///photos/sunflower.jpg",
            t0(),
        );
        assert_eq!(record.pattern_type, PatternType::Fibonacci);
        assert_eq!(record.subtype, "golden_spiral");
        assert_eq!(record.source, PatternSource::Ai);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn edits_bump_updated_at_only() {
        let mut record = PatternRecord::manual(
            "p2",
            PatternType::Geometric,
            "Tile floor",
            triangle_anchors(),
            "file:///photos/floor.jpg",
            t0(),
        );
        record.toggle_favorite(t1());
        assert!(record.is_favorite);
        assert_eq!(record.created_at, t0());
        assert_eq!(record.updated_at, t1());

        record.set_notes("spotted at the museum", t1());
        assert_eq!(record.user_notes.as_deref(), Some("spotted at the museum"));

        record.set_tags(vec!["museum".into(), "floor".into()], t1());
        assert_eq!(record.tags.len(), 2);
    }

    #[test]
    fn stored_legacy_type_heals_on_read() {
        let json = r#"{
            "id": "old1",
            "type": "elliott_wave",
            "subtype": "elliott_wave",
            "name": "Old chart",
            "anchors": [{"x": 0.0, "y": 50.0}, {"x": 100.0, "y": 50.0}],
            "source": "ai",
            "image_uri": "file:///photos/chart.png",
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-01T12:00:00Z"
        }"#;
        let record: PatternRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.pattern_type, PatternType::Fibonacci);
        // Raw label survives for display.
        assert_eq!(record.subtype, "elliott_wave");
    }

    #[test]
    fn serde_round_trip_preserves_canonical_type() {
        let record = PatternRecord::manual(
            "p3",
            PatternType::Symmetry,
            "Butterfly",
            triangle_anchors(),
            "file:///photos/butterfly.jpg",
            t0(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"symmetry\""));
        let back: PatternRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pattern_type, PatternType::Symmetry);
        assert_eq!(back.anchors, record.anchors);
    }

    #[test]
    fn legacy_channel_record_renders_dashed_polyline() {
        let record = PatternRecord::from_detection(
            "p4",
            "channel",
            "Trend channel",
            0.7,
            vec![AnchorPoint::new(0.0, 80.0), AnchorPoint::new(100.0, 20.0)],
            Measurements::new(),
            "file:///photos/chart2.png",
            t0(),
        );
        // The raw label is retained as subtype, so the legacy shape wins.
        assert_eq!(record.pattern_type, PatternType::Geometric);
        let overlay = record.overlay(Viewport::new(100.0, 100.0));
        assert_eq!(overlay.path, "M 0 80 L 100 20");
        assert_eq!(overlay.dash_pattern, Some("6,4"));
        assert_eq!(overlay.fill_opacity, 0.0);
    }

    #[test]
    fn canonical_geometric_record_renders_closed_filled() {
        let record = PatternRecord::manual(
            "p5",
            PatternType::Geometric,
            "Triangle",
            triangle_anchors(),
            "file:///photos/tri.jpg",
            t0(),
        );
        let overlay = record.overlay(Viewport::new(100.0, 100.0));
        assert!(overlay.path.ends_with('Z'));
        assert_eq!(overlay.dash_pattern, None);
        assert_eq!(overlay.fill_opacity, 0.15);
    }

    #[test]
    fn underpopulated_record_overlay_is_empty_not_an_error() {
        let record = PatternRecord::manual(
            "p6",
            PatternType::Geometric,
            "Two points only",
            vec![AnchorPoint::new(0.0, 0.0), AnchorPoint::new(10.0, 10.0)],
            "file:///photos/x.jpg",
            t0(),
        );
        let overlay = record.overlay(Viewport::new(100.0, 100.0));
        assert_eq!(overlay.path, "");
    }
}
