//! Export structures and CSV writers for analysis reports.

mod export;
mod template;

pub use export::{
    ExportPaths, SummaryRow, default_report_dir_name, summary_rows, write_report_csv,
    write_summary_csv, write_unmatched_csv,
};
pub use template::{TEMPLATE_HEADERS, TEMPLATE_ROWS, write_template_csv};
