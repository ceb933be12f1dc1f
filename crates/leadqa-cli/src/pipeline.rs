//! Reusable analysis pipeline shared by the CLI commands.

use std::path::Path;

use anyhow::{Context, Result};

use leadqa_ingest::read_dataset;
use leadqa_match::AnalysisSession;
use leadqa_model::AnalysisReport;

/// Outcome of a full reference-plus-returns run.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub report: AnalysisReport,
    pub reference_rows: usize,
}

/// Loads both files and reconciles the returns against the reference.
///
/// The reference must expose a phone-like column; the returns file falls
/// back to the default `telephone` field when detection finds none.
pub fn analyze_files(reference: &Path, returns: &Path) -> Result<AnalysisRun> {
    let reference_data = read_dataset(reference)
        .with_context(|| format!("load reference: {}", reference.display()))?;
    let returns_data =
        read_dataset(returns).with_context(|| format!("load returns: {}", returns.display()))?;

    let mut session = AnalysisSession::new();
    let reference_rows = session.load_reference(&reference_data)?;
    let report = session.analyze_returns(&returns_data)?.clone();
    Ok(AnalysisRun {
        report,
        reference_rows,
    })
}
