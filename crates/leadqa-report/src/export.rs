//! CSV export of an analysis report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use leadqa_model::{AnalysisReport, STATUS_DUPLICATE, STATUS_INVALID, STATUS_OTHER};

/// One aggregate line per source in the exported summary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Total problèmes")]
    pub total: u64,
    #[serde(rename = "Invalides")]
    pub invalid: u64,
    #[serde(rename = "Doublons")]
    pub duplicate: u64,
    #[serde(rename = "Autres")]
    pub other: u64,
}

/// Files produced by a report export.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub summary: PathBuf,
    /// Present only when the report holds unmatched rows.
    pub unmatched: Option<PathBuf>,
}

/// Flattens the per-source breakdowns into summary lines, one per source in
/// map order, with counts for the three conventional statuses.
pub fn summary_rows(report: &AnalysisReport) -> Vec<SummaryRow> {
    report
        .sources
        .iter()
        .map(|(source, breakdown)| {
            let count = |status: &str| breakdown.statuses.get(status).copied().unwrap_or(0);
            SummaryRow {
                source: source.clone(),
                total: breakdown.total,
                invalid: count(STATUS_INVALID),
                duplicate: count(STATUS_DUPLICATE),
                other: count(STATUS_OTHER),
            }
        })
        .collect()
}

pub fn write_summary_csv(report: &AnalysisReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("write summary: {}", path.display()))?;
    for row in summary_rows(report) {
        writer
            .serialize(row)
            .with_context(|| format!("write summary row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush summary: {}", path.display()))?;
    Ok(())
}

pub fn write_unmatched_csv(report: &AnalysisReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("write unmatched: {}", path.display()))?;
    writer
        .write_record(["Numéro original", "Format normalisé", "Status"])
        .with_context(|| format!("write unmatched header: {}", path.display()))?;
    for record in &report.unmatched_rows {
        writer
            .write_record([
                record.original.as_str(),
                record.normalized.as_str(),
                record.status.as_str(),
            ])
            .with_context(|| format!("write unmatched row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush unmatched: {}", path.display()))?;
    Ok(())
}

/// Writes the full export into a directory: `resume.csv` always,
/// `non-trouves.csv` only when there are unmatched rows.
pub fn write_report_csv(report: &AnalysisReport, dir: &Path) -> Result<ExportPaths> {
    fs::create_dir_all(dir).with_context(|| format!("create report dir: {}", dir.display()))?;
    let summary = dir.join("resume.csv");
    write_summary_csv(report, &summary)?;
    let unmatched = if report.unmatched_rows.is_empty() {
        None
    } else {
        let path = dir.join("non-trouves.csv");
        write_unmatched_csv(report, &path)?;
        Some(path)
    };
    tracing::debug!(dir = %dir.display(), "report exported");
    Ok(ExportPaths { summary, unmatched })
}

/// Default directory name for a dated export, e.g. `rapport-2026-08-07`.
pub fn default_report_dir_name() -> String {
    format!("rapport-{}", Local::now().format("%Y-%m-%d"))
}
