//! Render stored patterns into a single overlay SVG document.

use patternscope::{Overlay, PatternRecord, Viewport};
use serde::{Deserialize, Serialize};

use super::common::{load_records, read_input, write_output};

/// Stroke and page styling for rendered overlays.
///
/// Loaded from YAML with `--style`; every field defaults so a partial file
/// works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub background: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: 2.0,
            background: "white".to_string(),
        }
    }
}

/// Output format for the render command.
#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Svg,
    Json,
}

/// One overlay plus record identity, for JSON output.
#[derive(Serialize)]
struct JsonOverlay<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    pattern_type: &'static str,
    #[serde(flatten)]
    overlay: Overlay,
}

pub fn cmd_render(args: &[String]) {
    let mut input: Option<&str> = None;
    let mut output: Option<&str> = None;
    let mut width = 390.0;
    let mut height = 520.0;
    let mut style_path: Option<&str> = None;
    let mut format = OutputFormat::Svg;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(&args[i]);
                }
            }
            "--width" => {
                i += 1;
                if i < args.len() {
                    width = args[i].parse().unwrap_or(390.0);
                }
            }
            "--height" => {
                i += 1;
                if i < args.len() {
                    height = args[i].parse().unwrap_or(520.0);
                }
            }
            "--style" => {
                i += 1;
                if i < args.len() {
                    style_path = Some(&args[i]);
                }
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = match args[i].to_lowercase().as_str() {
                        "svg" => OutputFormat::Svg,
                        "json" => OutputFormat::Json,
                        other => {
                            eprintln!("Unknown format: {}. Use 'svg' or 'json'.", other);
                            std::process::exit(1);
                        }
                    };
                }
            }
            path => {
                if input.is_none() {
                    input = Some(path);
                }
            }
        }
        i += 1;
    }

    let input = input.unwrap_or_else(|| {
        eprintln!("Error: patterns file required (use '-' for stdin)");
        std::process::exit(1);
    });

    let json = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let records = load_records(&json).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let style = match style_path {
        Some(p) => load_style(p),
        None => RenderStyle::default(),
    };

    let viewport = Viewport::new(width, height);
    eprintln!("Loaded {} patterns", records.len());

    let rendered = match format {
        OutputFormat::Svg => overlays_to_svg(&records, viewport, &style),
        OutputFormat::Json => {
            let rows: Vec<JsonOverlay> = records
                .iter()
                .map(|record| JsonOverlay {
                    id: &record.id,
                    name: &record.name,
                    pattern_type: record.pattern_type.name(),
                    overlay: record.overlay(viewport),
                })
                .collect();
            serde_json::to_string(&rows).unwrap_or_else(|e| {
                eprintln!("Failed to serialize JSON: {}", e);
                std::process::exit(1);
            })
        }
    };

    write_output(output, &rendered);
}

fn load_style(path: &str) -> RenderStyle {
    let content = read_input(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    serde_yaml::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Failed to parse style {}: {}", path, e);
        std::process::exit(1);
    })
}

/// Build the overlay SVG document.
///
/// Records whose overlay comes back empty (not enough anchors for their
/// shape) are skipped with a note on stderr rather than aborting the page.
pub fn overlays_to_svg(records: &[PatternRecord], viewport: Viewport, style: &RenderStyle) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">
<rect width="100%" height="100%" fill="{}"/>
"#,
        viewport.width, viewport.height, style.background
    ));

    for record in records {
        let overlay = record.overlay(viewport);
        if overlay.path.is_empty() {
            eprintln!("Skipping '{}': not enough anchors for its shape", record.name);
            continue;
        }

        let fill = if overlay.fill_opacity > 0.0 {
            style.stroke.as_str()
        } else {
            "none"
        };
        svg.push_str(&format!(
            r#"  <path d="{}" stroke="{}" stroke-width="{}" fill="{}" fill-opacity="{}""#,
            overlay.path, style.stroke, style.stroke_width, fill, overlay.fill_opacity
        ));
        if let Some(dash) = overlay.dash_pattern {
            svg.push_str(&format!(r#" stroke-dasharray="{}""#, dash));
        }
        svg.push_str("/>\n");
    }

    svg.push_str("</svg>\n");
    svg
}
