//! Map free-form classifier labels onto the taxonomy.

use patternscope::{normalize, PatternType};
use serde::Serialize;

/// One label mapping, for JSON output.
#[derive(Serialize)]
struct JsonMapping<'a> {
    label: &'a str,
    canonical: &'static str,
    /// False when the label was coerced rather than an exact taxonomy name.
    exact: bool,
}

pub fn cmd_normalize(args: &[String]) {
    let mut json_output = false;
    let mut labels: Vec<&str> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => json_output = true,
            label => labels.push(label),
        }
    }

    if labels.is_empty() {
        eprintln!("Error: at least one label required");
        eprintln!("Usage: patternscope normalize <label>... [--json]");
        std::process::exit(1);
    }

    if json_output {
        let rows: Vec<JsonMapping> = labels
            .iter()
            .map(|label| JsonMapping {
                label,
                canonical: normalize(label).name(),
                exact: PatternType::is_valid(label),
            })
            .collect();
        match serde_json::to_string(&rows) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for label in &labels {
            let canonical = normalize(label);
            let marker = if PatternType::is_valid(label) { "" } else { " *" };
            println!("  {:24} -> {}{}", label, canonical.name(), marker);
        }
        println!();
        println!("  * coerced (not an exact taxonomy name)");
    }
}
