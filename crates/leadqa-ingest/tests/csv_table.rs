use std::io::Write;

use leadqa_ingest::read_dataset;
use tempfile::NamedTempFile;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn reads_comma_separated_rows() {
    let file = write_file("telephone,source\n0612345678,FacebookAds\n0798765432,GoogleAds\n");
    let dataset = read_dataset(file.path()).unwrap();

    assert_eq!(dataset.columns, vec!["telephone", "source"]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.rows[0].get("telephone"), Some("0612345678"));
    assert_eq!(dataset.rows[1].get("source"), Some("GoogleAds"));
}

#[test]
fn sniffs_semicolon_delimiter() {
    let file = write_file("telephone;source\n06 12 34 56 78;Salon\n");
    let dataset = read_dataset(file.path()).unwrap();

    assert_eq!(dataset.columns, vec!["telephone", "source"]);
    assert_eq!(dataset.rows[0].get("telephone"), Some("06 12 34 56 78"));
}

#[test]
fn strips_bom_and_collapses_header_whitespace() {
    let file = write_file("\u{feff}telephone, source  label\n0612345678,FacebookAds\n");
    let dataset = read_dataset(file.path()).unwrap();

    assert_eq!(dataset.columns, vec!["telephone", "source label"]);
    assert_eq!(dataset.rows[0].get("telephone"), Some("0612345678"));
}

#[test]
fn skips_blank_lines_and_pads_short_records() {
    let file = write_file("telephone,source,status\n0612345678\n,,\n0798765432,GoogleAds\n");
    let dataset = read_dataset(file.path()).unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.rows[0].get("telephone"), Some("0612345678"));
    assert_eq!(dataset.rows[0].get("source"), None);
    assert_eq!(dataset.rows[1].get("source"), Some("GoogleAds"));
}

#[test]
fn missing_file_reports_path_in_error() {
    let error = read_dataset(std::path::Path::new("does-not-exist.csv")).unwrap_err();
    assert!(error.to_string().contains("does-not-exist.csv"));
}
