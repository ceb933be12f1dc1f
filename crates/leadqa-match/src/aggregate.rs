//! Folding of match outcomes into the final report.

use leadqa_model::{AnalysisReport, MatchOutcome, UnmatchedRecord};

/// Folds outcomes into an [`AnalysisReport`].
///
/// `total_rows` is the full size of the returns dataset; rows skipped for a
/// blank phone show up as `total_rows - matched - unmatched`. Unmatched rows
/// keep their input order for manual review.
pub fn aggregate(outcomes: &[MatchOutcome], total_rows: usize) -> AnalysisReport {
    let mut report = AnalysisReport {
        total: total_rows,
        ..AnalysisReport::default()
    };
    for outcome in outcomes {
        match outcome {
            MatchOutcome::Matched { source, status } => {
                report.matched += 1;
                let breakdown = report.sources.entry(source.clone()).or_default();
                breakdown.total += 1;
                *breakdown.statuses.entry(status.clone()).or_insert(0) += 1;
            }
            MatchOutcome::Unmatched {
                original,
                normalized,
                status,
            } => {
                report.unmatched += 1;
                report.unmatched_rows.push(UnmatchedRecord {
                    original: original.clone(),
                    normalized: normalized.clone(),
                    status: status.clone(),
                });
            }
        }
    }
    report.skipped = total_rows.saturating_sub(report.matched + report.unmatched);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_matched_and_unmatched_counts() {
        let outcomes = vec![
            MatchOutcome::Matched {
                source: "GoogleAds".to_string(),
                status: "invalide".to_string(),
            },
            MatchOutcome::Matched {
                source: "GoogleAds".to_string(),
                status: "doublon".to_string(),
            },
            MatchOutcome::Unmatched {
                original: "0700000000".to_string(),
                normalized: "0700000000".to_string(),
                status: "autre".to_string(),
            },
        ];
        let report = aggregate(&outcomes, 4);
        assert_eq!(report.total, 4);
        assert_eq!(report.matched, 2);
        assert_eq!(report.unmatched, 1);
        assert_eq!(report.skipped, 1);
        let breakdown = report.sources.get("GoogleAds").expect("source entry");
        assert_eq!(breakdown.total, 2);
        assert_eq!(breakdown.statuses.get("invalide"), Some(&1));
        assert_eq!(breakdown.statuses.get("doublon"), Some(&1));
        assert_eq!(report.unmatched_rows.len(), 1);
    }

    #[test]
    fn unmatched_rows_preserve_input_order() {
        let outcomes: Vec<MatchOutcome> = (0..3)
            .map(|idx| MatchOutcome::Unmatched {
                original: format!("070000000{idx}"),
                normalized: format!("070000000{idx}"),
                status: "invalide".to_string(),
            })
            .collect();
        let report = aggregate(&outcomes, 3);
        let originals: Vec<&str> = report
            .unmatched_rows
            .iter()
            .map(|record| record.original.as_str())
            .collect();
        assert_eq!(originals, vec!["0700000000", "0700000001", "0700000002"]);
    }
}
