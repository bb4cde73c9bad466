use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One validated instruction-tuning sample. Two records with identical
/// field values are the same record for deduplication purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub instruction: String,
    pub input: String,
    pub output: String,
    pub category: String,
}

/// Persist the accumulated dataset as one pretty-printed JSON array.
/// serde_json writes non-ASCII characters literally, so Persian text lands
/// in the file unescaped.
pub fn save_dataset(path: &Path, records: &[Record]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write dataset to {}", path.display()))?;
    info!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}

// ── Tests ──
