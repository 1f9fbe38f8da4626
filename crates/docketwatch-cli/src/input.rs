//! Docket input files.
//!
//! Two layouts are accepted:
//!
//! - a bare array of entries: `[{"docket_number": 1, "date": "2024-01-02", "text": "..."}]`
//! - a docket index shared by several cases:
//!   `{"entries": [{"case_id": "1:24-cv-00042", "docket_number": 1, ...}]}`
//!
//! Entries are returned sorted by docket number.

use std::path::Path;

use anyhow::Context;
use docketwatch_core::DocketEntry;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
struct IndexedEntry {
    #[serde(default)]
    case_id: Option<String>,
    #[serde(flatten)]
    entry: DocketEntry,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocketFile {
    Index { entries: Vec<IndexedEntry> },
    Entries(Vec<IndexedEntry>),
}

/// Parse docket JSON, keeping only `case`'s entries when given.
pub fn parse_docket(json: &str, case: Option<&str>) -> anyhow::Result<Vec<DocketEntry>> {
    let file: DocketFile = serde_json::from_str(json).context("parsing docket JSON")?;
    let indexed = match file {
        DocketFile::Index { entries } | DocketFile::Entries(entries) => entries,
    };

    let mut entries: Vec<DocketEntry> = indexed
        .into_iter()
        .filter(|e| case.is_none_or(|case| e.case_id.as_deref() == Some(case)))
        .map(|e| e.entry)
        .collect();
    entries.sort_by_key(|e| e.docket_number);
    Ok(entries)
}

pub fn load_docket(path: &Path, case: Option<&str>) -> anyhow::Result<Vec<DocketEntry>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let entries = parse_docket(&json, case).with_context(|| format!("loading {}", path.display()))?;
    info!(path = %path.display(), count = entries.len(), "loaded docket entries");
    Ok(entries)
}

/// Case label for reports when no `--case` was given: the file stem.
pub fn case_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}
