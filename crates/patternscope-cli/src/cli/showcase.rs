//! Tiled sample page - one tile per showcased type label.
//!
//! Renders a deterministic sample of each shape class so overlay styling
//! can be eyeballed without a device build. Anchors are jittered with a
//! seeded generator; the same seed always produces the same page.

use patternscope::{dash_pattern, fill_opacity, generate_path, AnchorPoint, Measurements, Viewport};

const TILE_SIZE: f64 = 220.0;
const GUTTER: f64 = 16.0;
const MARGIN: f64 = 24.0;
const LABEL_HEIGHT: f64 = 18.0;
const COLUMNS: usize = 2;

/// Labels showcased, one tile each: the taxonomy shapes plus the legacy
/// chart types that still render.
const SHOWCASE_LABELS: &[&str] = &[
    "fibonacci",
    "geometric",
    "symmetry",
    "wave",
    "channel",
    "pitchfork",
];

/// Seeded jitter so sample pages are reproducible. Small LCG, Numerical
/// Recipes constants.
struct Jitter {
    state: u64,
}

impl Jitter {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    /// Next offset in `[-amount, amount)`.
    fn offset(&mut self, amount: f64) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let unit = (self.state >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * amount
    }
}

pub fn cmd_showcase(args: &[String]) {
    let mut output: Option<&str> = None;
    let mut seed = 7u64;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(&args[i]);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(7);
                }
            }
            other => {
                eprintln!("Unknown showcase option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let svg = showcase_page(seed);
    super::common::write_output(output, &svg);
}

/// Build the showcase page SVG.
pub fn showcase_page(seed: u64) -> String {
    let mut jitter = Jitter::new(seed);
    let rows = SHOWCASE_LABELS.len().div_ceil(COLUMNS);
    let page_width = MARGIN * 2.0 + COLUMNS as f64 * TILE_SIZE + (COLUMNS - 1) as f64 * GUTTER;
    let page_height =
        MARGIN * 2.0 + rows as f64 * (TILE_SIZE + LABEL_HEIGHT) + (rows - 1) as f64 * GUTTER;

    let tile_viewport = Viewport::new(TILE_SIZE, TILE_SIZE);
    let measurements = Measurements::new();

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">
<rect width="100%" height="100%" fill="white"/>
"#,
        page_width, page_height
    ));

    for (index, label) in SHOWCASE_LABELS.iter().enumerate() {
        let col = index % COLUMNS;
        let row = index / COLUMNS;
        let x = MARGIN + col as f64 * (TILE_SIZE + GUTTER);
        let y = MARGIN + row as f64 * (TILE_SIZE + LABEL_HEIGHT + GUTTER);

        let anchors = sample_anchors(label, &mut jitter);
        let path = generate_path(label, &anchors, &measurements, tile_viewport);
        let fill = if fill_opacity(label) > 0.0 { "black" } else { "none" };

        svg.push_str(&format!(
            "<g transform=\"translate({}, {})\">\n",
            x, y
        ));
        svg.push_str(&format!(
            "  <rect width=\"{0}\" height=\"{0}\" fill=\"none\" stroke=\"#cccccc\"/>\n",
            TILE_SIZE
        ));
        svg.push_str(&format!(
            r#"  <path d="{}" stroke="black" stroke-width="1.5" fill="{}" fill-opacity="{}""#,
            path,
            fill,
            fill_opacity(label)
        ));
        if let Some(dash) = dash_pattern(label) {
            svg.push_str(&format!(r#" stroke-dasharray="{}""#, dash));
        }
        svg.push_str("/>\n");
        svg.push_str(&format!(
            "  <text x=\"4\" y=\"{}\" font-family=\"monospace\" font-size=\"12\">{}</text>\n",
            TILE_SIZE + 14.0,
            label
        ));
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Percent-space sample anchors for a label, lightly jittered.
fn sample_anchors(label: &str, jitter: &mut Jitter) -> Vec<AnchorPoint> {
    let j = 6.0;
    match label {
        "fibonacci" => vec![
            AnchorPoint::new(50.0 + jitter.offset(j), 50.0 + jitter.offset(j)),
            AnchorPoint::new(74.0 + jitter.offset(j), 50.0 + jitter.offset(j)),
        ],
        "wave" => vec![
            AnchorPoint::new(8.0, 60.0 + jitter.offset(j)),
            AnchorPoint::new(35.0, 30.0 + jitter.offset(j)),
            AnchorPoint::new(65.0, 70.0 + jitter.offset(j)),
            AnchorPoint::new(92.0, 40.0 + jitter.offset(j)),
        ],
        "geometric" | "symmetry" | "sacred_geometry" => vec![
            AnchorPoint::new(50.0, 12.0 + jitter.offset(j)),
            AnchorPoint::new(88.0, 40.0 + jitter.offset(j)),
            AnchorPoint::new(73.0, 85.0 + jitter.offset(j)),
            AnchorPoint::new(27.0, 85.0 + jitter.offset(j)),
            AnchorPoint::new(12.0, 40.0 + jitter.offset(j)),
        ],
        _ => vec![
            AnchorPoint::new(10.0, 72.0 + jitter.offset(j)),
            AnchorPoint::new(45.0, 48.0 + jitter.offset(j)),
            AnchorPoint::new(90.0, 24.0 + jitter.offset(j)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_page() {
        assert_eq!(showcase_page(7), showcase_page(7));
        assert_ne!(showcase_page(7), showcase_page(8));
    }

    #[test]
    fn page_has_one_tile_per_label() {
        let svg = showcase_page(7);
        assert_eq!(svg.matches("<path").count(), SHOWCASE_LABELS.len());
        for label in SHOWCASE_LABELS {
            assert!(svg.contains(label), "missing tile label {label}");
        }
    }

    #[test]
    fn jitter_stays_in_range() {
        let mut jitter = Jitter::new(42);
        for _ in 0..1000 {
            let v = jitter.offset(6.0);
            assert!((-6.0..6.0).contains(&v), "out of range: {v}");
        }
    }
}
