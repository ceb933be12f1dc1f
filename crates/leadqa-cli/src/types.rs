use leadqa_model::AnalysisReport;
use leadqa_report::ExportPaths;

#[derive(Debug)]
pub struct AnalyzeResult {
    pub report: AnalysisReport,
    pub reference_rows: usize,
    pub export: Option<ExportPaths>,
}
