//! Loose recovery tiers for responses the line scanner could not handle:
//! whole-array parsing and a last-resort fixed-grammar pattern match.

use std::sync::LazyLock;

use regex::Regex;

use crate::dataset::Record;

use super::record_from_value;

/// Literal shape of one record with the four keys in canonical order.
/// `[^"]*` cannot cross a quote, so values containing escaped quotes are
/// unmatchable — accepted limitation of this tier.
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\{\s*"instruction"\s*:\s*"[^"]*"\s*,\s*"input"\s*:\s*"[^"]*"\s*,\s*"output"\s*:\s*"[^"]*"\s*,\s*"category"\s*:\s*"[^"]*"\s*\}"#,
    )
    .unwrap()
});

/// Try to read the response as one JSON array: everything from the first
/// `[` to the last `]` inclusive. Returns the valid records found, or
/// `None` when there is no such span, it does not parse, or no element
/// validates.
pub fn recover_array(response: &str) -> Option<Vec<Record>> {
    let start = response.find('[')?;
    let end = response.rfind(']')?;
    if start >= end {
        return None;
    }

    let array: serde_json::Value = serde_json::from_str(&response[start..=end]).ok()?;
    let records: Vec<Record> = array
        .as_array()?
        .iter()
        .filter_map(record_from_value)
        .collect();

    if records.is_empty() {
        None
    } else {
        Some(records)
    }
}

/// Regex-salvage individual records from anywhere in the response,
/// appending to `records` while skipping structural duplicates.
pub fn salvage_patterns(response: &str, records: &mut Vec<Record>) {
    for m in RECORD_RE.find_iter(response) {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(m.as_str()) else {
            continue;
        };
        if let Some(record) = record_from_value(&value) {
            if !records.contains(&record) {
                records.push(record);
            }
        }
    }
}

// ── Tests ──
