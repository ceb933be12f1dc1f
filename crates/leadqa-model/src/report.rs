use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-source accumulation of returned-call outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub total: u64,
    pub statuses: BTreeMap<String, u64>,
}

/// A returns row whose phone matched nothing, kept for manual review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedRecord {
    pub original: String,
    pub normalized: String,
    pub status: String,
}

/// Aggregate result of reconciling one returns dataset.
///
/// Rows with a blank phone contribute to neither `matched` nor `unmatched`;
/// they are surfaced through `skipped`, so `total` always equals
/// `matched + unmatched + skipped`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub skipped: usize,
    pub sources: BTreeMap<String, SourceBreakdown>,
    pub unmatched_rows: Vec<UnmatchedRecord>,
}

impl AnalysisReport {
    /// Number of distinct source labels seen among matched rows.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}
