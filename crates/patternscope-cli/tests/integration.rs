//! Integration tests for the patternscope CLI.
//!
//! These run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_patternscope"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    path
}

const SAMPLE_RECORDS: &str = r#"[
  {
    "id": "tri",
    "type": "geometric",
    "subtype": "geometric",
    "name": "Triangle",
    "anchors": [{"x": 10.0, "y": 10.0}, {"x": 90.0, "y": 10.0}, {"x": 50.0, "y": 80.0}],
    "source": "manual",
    "image_uri": "file:///tri.jpg",
    "created_at": "2026-01-01T00:00:00Z",
    "updated_at": "2026-01-01T00:00:00Z"
  },
  {
    "id": "old",
    "type": "elliott_wave",
    "subtype": "elliott_wave",
    "name": "Old chart",
    "anchors": [{"x": 0.0, "y": 50.0}, {"x": 100.0, "y": 50.0}],
    "source": "ai",
    "confidence": 0.8,
    "image_uri": "file:///chart.png",
    "created_at": "2024-05-01T12:00:00Z",
    "updated_at": "2024-05-01T12:00:00Z"
  }
]"#;

#[test]
fn types_command_lists_taxonomy() {
    let output = run(&["types"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    for name in ["fibonacci", "geometric", "symmetry", "custom"] {
        assert!(stdout.contains(name), "Should list '{}'", name);
    }
}

#[test]
fn normalize_maps_legacy_labels() {
    let output = run(&["normalize", "elliott_wave", "mandala", "zzz", "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("\"canonical\":\"fibonacci\""), "got {stdout}");
    assert!(stdout.contains("\"canonical\":\"symmetry\""), "got {stdout}");
    assert!(stdout.contains("\"canonical\":\"custom\""), "got {stdout}");
    assert!(stdout.contains("\"exact\":false"), "got {stdout}");
}

#[test]
fn normalize_requires_a_label() {
    let output = run(&["normalize"]);
    assert!(!output.status.success());
}

#[test]
fn render_produces_svg() {
    let path = write_temp("patternscope_render_test.json", SAMPLE_RECORDS);

    let output = run(&[
        "render",
        path.to_str().unwrap(),
        "--width",
        "100",
        "--height",
        "100",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<svg"), "got {stdout}");
    assert_eq!(stdout.matches("<path").count(), 2, "got {stdout}");
    // The triangle is a closed shape with a faint fill.
    assert!(stdout.contains("d=\"M 10 10 L 90 10 L 50 80 Z\""), "got {stdout}");
    assert!(stdout.contains("fill-opacity=\"0.15\""), "got {stdout}");
}

#[test]
fn render_produces_json_overlays() {
    let path = write_temp("patternscope_render_json_test.json", SAMPLE_RECORDS);

    let output = run(&[
        "render",
        path.to_str().unwrap(),
        "-f",
        "json",
        "--width",
        "100",
        "--height",
        "100",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("\"id\":\"tri\""), "got {stdout}");
    // The healed record renders by its canonical type.
    assert!(stdout.contains("\"type\":\"fibonacci\""), "got {stdout}");
    assert!(stdout.contains("\"path\":"), "got {stdout}");
}

#[test]
fn validate_reports_healed_types() {
    let path = write_temp("patternscope_validate_test.json", SAMPLE_RECORDS);

    let output = run(&["validate", path.to_str().unwrap(), "--json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("\"stored\":\"elliott_wave\""),
        "got {stdout}"
    );
    assert!(stdout.contains("\"canonical\":\"fibonacci\""), "got {stdout}");
    assert!(stdout.contains("\"healed\":true"), "got {stdout}");
    assert!(stdout.contains("\"healed\":false"), "got {stdout}");
}

#[test]
fn showcase_renders_every_shape_class() {
    let output = run(&["showcase"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("<svg"), "got {stdout}");
    for label in ["fibonacci", "geometric", "symmetry", "wave", "channel", "pitchfork"] {
        assert!(stdout.contains(label), "missing {label}");
    }
}

#[test]
fn help_shows_commands() {
    let output = run(&["help"]);
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    for command in ["render", "validate", "normalize", "types", "showcase"] {
        assert!(combined.contains(command), "Should mention {}", command);
    }
}

#[test]
fn unknown_command_fails() {
    let output = run(&["frobnicate"]);
    assert!(!output.status.success());
}
