//! Caller-owned state for one reconciliation session.

use leadqa_model::{AnalysisError, AnalysisReport, Dataset, Result};

use crate::aggregate::aggregate;
use crate::columns::{DEFAULT_PHONE_COLUMN, detect_columns};
use crate::engine::match_returns;
use crate::index::ReferenceIndex;

/// Holds the current reference index and the last report.
///
/// Loading a new reference dataset replaces the index wholesale and clears
/// the previous report; each returns analysis produces a fresh report.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    index: Option<ReferenceIndex>,
    last_report: Option<AnalysisReport>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the reference index from a dataset and swaps it in.
    ///
    /// Returns the number of rows that contributed index entries. Fails with
    /// [`AnalysisError::NoPhoneColumn`] when no phone-like column is found -
    /// without one, no matching is possible.
    pub fn load_reference(&mut self, dataset: &Dataset) -> Result<usize> {
        let detected = detect_columns(&dataset.columns);
        let Some(phone_column) = detected.phone else {
            return Err(AnalysisError::NoPhoneColumn {
                dataset: "reference".to_string(),
            });
        };
        let index = ReferenceIndex::build(dataset, &phone_column, detected.source.as_deref());
        let indexed = index.indexed_rows();
        tracing::info!(
            rows = indexed,
            phone_column = %phone_column,
            source_column = detected.source.as_deref().unwrap_or("-"),
            "reference dataset loaded"
        );
        self.index = Some(index);
        self.last_report = None;
        Ok(indexed)
    }

    /// Reconciles a returns dataset against the loaded reference index.
    ///
    /// The phone column is detected from the dataset's columns, falling back
    /// to [`DEFAULT_PHONE_COLUMN`]. Fails when no reference was loaded.
    pub fn analyze_returns(&mut self, dataset: &Dataset) -> Result<&AnalysisReport> {
        let Some(index) = self.index.as_ref() else {
            return Err(AnalysisError::NoReferenceLoaded);
        };
        let detected = detect_columns(&dataset.columns);
        let phone_column = detected
            .phone
            .unwrap_or_else(|| DEFAULT_PHONE_COLUMN.to_string());
        let outcomes = match_returns(dataset, &phone_column, index);
        let report = aggregate(&outcomes, dataset.len());
        tracing::info!(
            total = report.total,
            matched = report.matched,
            unmatched = report.unmatched,
            skipped = report.skipped,
            sources = report.source_count(),
            "returns dataset analyzed"
        );
        Ok(self.last_report.insert(report))
    }

    /// Rows indexed by the current reference dataset, 0 when none is loaded.
    pub fn reference_count(&self) -> usize {
        self.index.as_ref().map_or(0, ReferenceIndex::indexed_rows)
    }

    pub fn has_reference(&self) -> bool {
        self.index.is_some()
    }

    pub fn last_report(&self) -> Option<&AnalysisReport> {
        self.last_report.as_ref()
    }
}
