//! Reconciliation of a returns dataset against a reference index.

use leadqa_model::{DEFAULT_STATUS, Dataset, MatchOutcome};

use crate::index::ReferenceIndex;
use crate::normalize::normalize_phone;
use crate::variants::phone_variants;

/// Field carrying the outcome label on returns rows.
pub const STATUS_COLUMN: &str = "status";

/// Classifies every returns row as matched or unmatched.
///
/// Rows with a blank phone field are skipped and appear in no outcome; the
/// aggregator accounts for them through the report's `skipped` counter. The
/// status defaults to the `invalide` sentinel when the row carries none. All
/// variants of the row's phone are probed; any hit resolves the row.
pub fn match_returns(
    dataset: &Dataset,
    phone_column: &str,
    index: &ReferenceIndex,
) -> Vec<MatchOutcome> {
    let mut outcomes = Vec::with_capacity(dataset.rows.len());
    for row in &dataset.rows {
        let Some(phone) = row.get(phone_column) else {
            continue;
        };
        let status = row.get(STATUS_COLUMN).unwrap_or(DEFAULT_STATUS).to_string();
        let variants = phone_variants(phone);
        match variants.iter().find_map(|variant| index.lookup(variant)) {
            Some(record) => outcomes.push(MatchOutcome::Matched {
                source: record.source.clone(),
                status,
            }),
            None => outcomes.push(MatchOutcome::Unmatched {
                original: phone.to_string(),
                normalized: normalize_phone(phone),
                status,
            }),
        }
    }
    outcomes
}
