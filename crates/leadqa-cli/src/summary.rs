use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use leadqa_model::AnalysisReport;
use leadqa_report::summary_rows;

use crate::types::AnalyzeResult;

pub fn print_summary(result: &AnalyzeResult) {
    let report = &result.report;
    println!("Reference: {} rows indexed", result.reference_rows);
    println!(
        "Returns: {} analyzed, {} matched, {} unmatched, {} skipped, {} sources",
        report.total,
        report.matched,
        report.unmatched,
        report.skipped,
        report.source_count()
    );
    print_source_table(report);
    print_unmatched_table(report);
    if let Some(export) = &result.export {
        println!();
        println!("Summary: {}", export.summary.display());
        if let Some(path) = &export.unmatched {
            println!("Unmatched: {}", path.display());
        }
    }
}

pub fn print_json(report: &AnalysisReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    println!("{json}");
    Ok(())
}

fn print_source_table(report: &AnalysisReport) {
    if report.sources.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Total"),
        header_cell("Invalides"),
        header_cell("Doublons"),
        header_cell("Autres"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut totals = [0u64; 4];
    for row in summary_rows(report) {
        totals[0] += row.total;
        totals[1] += row.invalid;
        totals[2] += row.duplicate;
        totals[3] += row.other;
        table.add_row(vec![
            Cell::new(&row.source)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(row.total),
            count_cell(row.invalid, Color::Red),
            count_cell(row.duplicate, Color::Yellow),
            count_cell(row.other, Color::Magenta),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals[0]).add_attribute(Attribute::Bold),
        count_cell(totals[1], Color::Red).add_attribute(Attribute::Bold),
        count_cell(totals[2], Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(totals[3], Color::Magenta).add_attribute(Attribute::Bold),
    ]);
    println!();
    println!("{table}");
}

fn print_unmatched_table(report: &AnalysisReport) {
    if report.unmatched_rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Numéro original"),
        header_cell("Format normalisé"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for record in &report.unmatched_rows {
        table.add_row(vec![
            Cell::new(&record.original),
            Cell::new(&record.normalized),
            Cell::new(&record.status),
        ]);
    }
    println!();
    println!("Non trouvés:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: u64, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
