//! Re-validate stored pattern types against the current taxonomy.
//!
//! Older releases shipped a wider taxonomy, so records on disk may carry
//! retired type labels. Deserialization already heals them silently; this
//! command makes the healing visible and can write the migrated records
//! back out.

use patternscope::normalize;
use serde::Serialize;
use serde_json::Value;

use super::common::{load_records, read_input, write_output};

/// One record's validation outcome.
#[derive(Serialize)]
struct ValidationRow {
    id: String,
    stored: String,
    canonical: &'static str,
    healed: bool,
}

pub fn cmd_validate(args: &[String]) {
    let mut input: Option<&str> = None;
    let mut output: Option<&str> = None;
    let mut json_output = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(&args[i]);
                }
            }
            "--json" => json_output = true,
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

    // Records heal on deserialization, so the raw stored labels have to be
    // pulled from the untyped JSON alongside them.
    let stored = stored_type_labels(&json);

    let rows: Vec<ValidationRow> = records
        .iter()
        .zip(stored)
        .map(|(record, stored)| {
            let canonical = normalize(&stored).name();
            ValidationRow {
                id: record.id.clone(),
                healed: stored != canonical,
                stored,
                canonical,
            }
        })
        .collect();

    let healed = rows.iter().filter(|r| r.healed).count();

    if json_output {
        match serde_json::to_string(&rows) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("Validated {} records, {} healed", rows.len(), healed);
        for row in &rows {
            let marker = if row.healed { "->" } else { "ok" };
            println!("  {:12} {:>18} {} {}", row.id, row.stored, marker, row.canonical);
        }
    }

    if let Some(path) = output {
        let healed_json = serde_json::to_string_pretty(&records).unwrap_or_else(|e| {
            eprintln!("Failed to serialize records: {}", e);
            std::process::exit(1);
        });
        write_output(Some(path), &healed_json);
    }
}

/// Pull the raw `type` strings out of the stored JSON, one per record.
fn stored_type_labels(json: &str) -> Vec<String> {
    let value: Value = serde_json::from_str(json).unwrap_or(Value::Null);
    let items = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => Vec::new(),
    };
    items
        .iter()
        .map(|item| {
            item.get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_stored_labels_from_array_and_object() {
        let array = r#"[{"type": "elliott_wave"}, {"type": "custom"}]"#;
        assert_eq!(stored_type_labels(array), vec!["elliott_wave", "custom"]);

        let object = r#"{"type": "wave"}"#;
        assert_eq!(stored_type_labels(object), vec!["wave"]);
    }
}
