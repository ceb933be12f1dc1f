//! Command implementations.

use std::path::PathBuf;

use anyhow::Result;

use leadqa_cli::logging::redact_value;
use leadqa_cli::pipeline::analyze_files;
use leadqa_report::{default_report_dir_name, write_report_csv, write_template_csv};

use crate::cli::{AnalyzeArgs, TemplateArgs};
use crate::types::AnalyzeResult;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let run = analyze_files(&args.reference, &args.returns)?;

    for record in &run.report.unmatched_rows {
        tracing::trace!(
            phone = redact_value(&record.original),
            normalized = redact_value(&record.normalized),
            status = %record.status,
            "unmatched return"
        );
    }

    let export = if args.no_export {
        None
    } else {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_report_dir_name()));
        Some(write_report_csv(&run.report, &dir)?)
    };

    Ok(AnalyzeResult {
        report: run.report,
        reference_rows: run.reference_rows,
        export,
    })
}

pub fn run_template(args: &TemplateArgs) -> Result<PathBuf> {
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("modele-retours.csv"));
    write_template_csv(&path)?;
    Ok(path)
}
