//! Guest directory file loading
//!
//! Reads the JSON directory once at startup and flags entries that can
//! never be matched by a visitor.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use fumi::{normalize, GuestRecord};

/// Load and check the directory file
pub fn load(path: &Path) -> Result<Vec<GuestRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read guest directory from {:?}", path))?;

    let records: Vec<GuestRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse guest directory {:?}", path))?;

    for problem in check(&records) {
        tracing::warn!("{}", problem);
    }

    Ok(records)
}

/// Problems worth a warning; none of them stop the server
pub fn check(records: &[GuestRecord]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for record in records {
        if !seen.insert(record.id.as_str()) {
            problems.push(format!("Duplicate guest id: {}", record.id));
        }

        // Search keys never contain whitespace or hiragana
        for name in [&record.kanji_name, &record.kana_name] {
            if normalize(name).as_str() != name.as_str() {
                problems.push(format!(
                    "Guest {} has name {:?} that no input can match",
                    record.id, name
                ));
            }
        }
    }

    problems
}
