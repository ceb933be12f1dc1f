use std::fs;

use leadqa_model::{AnalysisReport, SourceBreakdown, UnmatchedRecord};
use leadqa_report::{
    TEMPLATE_HEADERS, summary_rows, write_report_csv, write_template_csv,
};
use tempfile::tempdir;

fn sample_report() -> AnalysisReport {
    let mut report = AnalysisReport {
        total: 5,
        matched: 3,
        unmatched: 1,
        skipped: 1,
        ..AnalysisReport::default()
    };
    report.sources.insert(
        "FacebookAds".to_string(),
        SourceBreakdown {
            total: 2,
            statuses: [("invalide".to_string(), 1), ("doublon".to_string(), 1)]
                .into_iter()
                .collect(),
        },
    );
    report.sources.insert(
        "GoogleAds".to_string(),
        SourceBreakdown {
            total: 1,
            statuses: [("autre".to_string(), 1)].into_iter().collect(),
        },
    );
    report.unmatched_rows.push(UnmatchedRecord {
        original: "07 00 00 00 00".to_string(),
        normalized: "0700000000".to_string(),
        status: "invalide".to_string(),
    });
    report
}

#[test]
fn summary_rows_count_conventional_statuses() {
    let rows = summary_rows(&sample_report());
    assert_eq!(rows.len(), 2);

    let facebook = &rows[0];
    assert_eq!(facebook.source, "FacebookAds");
    assert_eq!(facebook.total, 2);
    assert_eq!(facebook.invalid, 1);
    assert_eq!(facebook.duplicate, 1);
    assert_eq!(facebook.other, 0);

    let google = &rows[1];
    assert_eq!(google.source, "GoogleAds");
    assert_eq!(google.other, 1);
}

#[test]
fn report_export_writes_summary_and_unmatched() {
    let dir = tempdir().expect("temp dir");
    let paths = write_report_csv(&sample_report(), dir.path()).unwrap();

    let summary = fs::read_to_string(&paths.summary).unwrap();
    let mut lines = summary.lines();
    assert_eq!(
        lines.next(),
        Some("Source,Total problèmes,Invalides,Doublons,Autres")
    );
    assert_eq!(lines.next(), Some("FacebookAds,2,1,1,0"));
    assert_eq!(lines.next(), Some("GoogleAds,1,0,0,1"));

    let unmatched_path = paths.unmatched.expect("unmatched file written");
    let unmatched = fs::read_to_string(unmatched_path).unwrap();
    let mut lines = unmatched.lines();
    assert_eq!(lines.next(), Some("Numéro original,Format normalisé,Status"));
    assert_eq!(lines.next(), Some("07 00 00 00 00,0700000000,invalide"));
}

#[test]
fn unmatched_file_is_omitted_when_everything_matched() {
    let mut report = sample_report();
    report.unmatched = 0;
    report.unmatched_rows.clear();

    let dir = tempdir().expect("temp dir");
    let paths = write_report_csv(&report, dir.path()).unwrap();
    assert!(paths.unmatched.is_none());
    assert!(!dir.path().join("non-trouves.csv").exists());
}

#[test]
fn template_lists_the_three_conventional_statuses() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("modele.csv");
    write_template_csv(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(TEMPLATE_HEADERS.join(",").as_str()));
    for status in ["invalide", "doublon", "autre"] {
        assert!(content.contains(status), "template misses {status}");
    }
}
