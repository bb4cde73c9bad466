//! Record extraction from raw model responses.
//!
//! Three recovery tiers, escalating in looseness, each tried only while the
//! yield stays below [`MIN_RECORDS`]:
//!
//! 1. brace-balanced line scan ([`scan`]) — objects embedded in prose;
//! 2. whole-array parse ([`salvage::recover_array`]) — the model answered
//!    with one JSON array, on success *replacing* the tier-1 result;
//! 3. fixed-grammar pattern salvage ([`salvage::salvage_patterns`]) —
//!    appended with a structural-duplicate check.
//!
//! Tier 1 does not deduplicate its own yield; only the tier-3 append path
//! checks for duplicates. Malformed fragments are dropped silently at every
//! tier — this function never fails, it just returns fewer records.

pub mod scan;
pub mod salvage;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::dataset::Record;

/// Below this many recovered records the next, looser tier is attempted.
const MIN_RECORDS: usize = 5;

const REQUIRED_KEYS: [&str; 4] = ["instruction", "input", "output", "category"];

/// One stray comma before the final closing brace.
static COMMA_BEFORE_BRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\}\s*$").unwrap());

/// Extract every recoverable record from one raw model response.
///
/// Always returns (possibly empty); logs the aggregate count at info and
/// individual fragment failures at debug only.
pub fn extract_records(response: &str) -> Vec<Record> {
    let mut records: Vec<Record> = scan::balanced_fragments(response)
        .iter()
        .filter_map(|fragment| parse_fragment(fragment))
        .collect();

    if records.len() < MIN_RECORDS {
        if let Some(from_array) = salvage::recover_array(response) {
            records = from_array;
        }
    }

    if records.len() < MIN_RECORDS {
        salvage::salvage_patterns(response, &mut records);
    }

    info!("Recovered {} records from response", records.len());
    records
}

/// Parse one candidate fragment into a validated record.
///
/// Tolerates a single trailing comma in either observed position: after the
/// closing brace (fragment separator) or, on a failed first parse, directly
/// before it.
fn parse_fragment(fragment: &str) -> Option<Record> {
    let mut text = fragment.trim();
    if let Some(stripped) = text.strip_suffix(',') {
        text = stripped.trim_end();
    }

    let value = serde_json::from_str::<serde_json::Value>(text)
        .or_else(|_| serde_json::from_str(&COMMA_BEFORE_BRACE_RE.replace(text, "}")))
        .map_err(|e| debug!("Discarding fragment: {} ({:.50})", e, text))
        .ok()?;

    record_from_value(&value)
}

/// A fragment is valid iff it parsed to an object carrying all four
/// required keys; the typed conversion then also requires string values.
pub(crate) fn record_from_value(value: &serde_json::Value) -> Option<Record> {
    let object = value.as_object()?;
    if !REQUIRED_KEYS.iter().all(|key| object.contains_key(*key)) {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

// ── Tests ──
