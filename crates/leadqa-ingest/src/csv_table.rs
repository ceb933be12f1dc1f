use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use leadqa_model::{Dataset, Row};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Picks the field delimiter from the header line. French exports commonly
/// use `;`; anything else falls back to `,`.
fn sniff_delimiter(path: &Path) -> Result<u8> {
    let file = File::open(path).with_context(|| format!("open csv: {}", path.display()))?;
    let mut header = String::new();
    BufReader::new(file)
        .read_line(&mut header)
        .with_context(|| format!("read header: {}", path.display()))?;
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    Ok(if semicolons > commas { b';' } else { b',' })
}

/// Reads a delimited file into a [`Dataset`].
///
/// Headers are BOM-stripped and whitespace-collapsed, cells are trimmed,
/// fully blank lines are dropped, and short records are padded to the header
/// width with empty values.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let delimiter = sniff_delimiter(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut dataset = Dataset::new(headers.clone());
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Row::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or("");
            row.insert(header.clone(), normalize_cell(value));
        }
        dataset.push_row(row);
    }
    tracing::debug!(
        path = %path.display(),
        columns = dataset.columns.len(),
        rows = dataset.len(),
        "dataset read"
    );
    Ok(dataset)
}
