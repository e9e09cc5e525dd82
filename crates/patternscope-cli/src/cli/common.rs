//! Shared I/O helpers for CLI commands.

use std::fs;
use std::io::{self, Read};

use patternscope::PatternRecord;

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))
    }
}

/// Write to a file, or stdout when the path is `-` or absent.
pub fn write_output(path: Option<&str>, content: &str) {
    match path {
        Some("-") | None => println!("{}", content),
        Some(p) => {
            if let Err(e) = fs::write(p, content) {
                eprintln!("Failed to write {}: {}", p, e);
                std::process::exit(1);
            }
            eprintln!("Wrote: {}", p);
        }
    }
}

/// Parse stored records: a single object or an array of them.
pub fn load_records(json: &str) -> Result<Vec<PatternRecord>, String> {
    if let Ok(records) = serde_json::from_str::<Vec<PatternRecord>>(json) {
        return Ok(records);
    }
    serde_json::from_str::<PatternRecord>(json)
        .map(|record| vec![record])
        .map_err(|e| format!("Failed to parse pattern records: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": "r1",
        "type": "geometric",
        "subtype": "geometric",
        "name": "Test",
        "anchors": [{"x": 10.0, "y": 10.0}],
        "source": "manual",
        "image_uri": "file:///x.jpg",
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z"
    }"#;

    #[test]
    fn loads_single_record_or_array() {
        assert_eq!(load_records(RECORD).unwrap().len(), 1);
        let array = format!("[{},{}]", RECORD, RECORD);
        assert_eq!(load_records(&array).unwrap().len(), 2);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(load_records("not json").is_err());
        assert!(load_records("{\"id\": 3}").is_err());
    }
}
