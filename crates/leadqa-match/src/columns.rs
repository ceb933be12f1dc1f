//! Heuristic detection of the phone and source columns of a dataset.

/// Substrings identifying a phone-bearing column, case-insensitive.
pub const PHONE_PATTERNS: [&str; 7] = [
    "phone",
    "telephone",
    "tel",
    "mobile",
    "portable",
    "gsm",
    "numero",
];

/// Substrings identifying a source/campaign column, case-insensitive.
pub const SOURCE_PATTERNS: [&str; 6] = [
    "source",
    "campaign",
    "campagne",
    "origine",
    "origin",
    "canal",
];

/// Phone column assumed for returns files when detection finds nothing.
pub const DEFAULT_PHONE_COLUMN: &str = "telephone";

/// Columns resolved for a dataset. `None` means no column name matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedColumns {
    pub phone: Option<String>,
    pub source: Option<String>,
}

/// Scans column names in their original order; the first name containing a
/// pattern wins for each role. This is a heuristic, not a guarantee - callers
/// decide whether a missing phone column is fatal.
pub fn detect_columns(columns: &[String]) -> DetectedColumns {
    let mut detected = DetectedColumns::default();
    for column in columns {
        let lower = column.to_lowercase();
        if detected.phone.is_none() && PHONE_PATTERNS.iter().any(|pattern| lower.contains(pattern))
        {
            detected.phone = Some(column.clone());
        }
        if detected.source.is_none()
            && SOURCE_PATTERNS.iter().any(|pattern| lower.contains(pattern))
        {
            detected.source = Some(column.clone());
        }
    }
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn finds_phone_and_source_case_insensitively() {
        let detected = detect_columns(&columns(&["Nom", "Téléphone Mobile", "Campagne"]));
        assert_eq!(detected.phone.as_deref(), Some("Téléphone Mobile"));
        assert_eq!(detected.source.as_deref(), Some("Campagne"));
    }

    #[test]
    fn first_match_in_column_order_wins() {
        let detected = detect_columns(&columns(&["tel_fixe", "portable", "source", "canal"]));
        assert_eq!(detected.phone.as_deref(), Some("tel_fixe"));
        assert_eq!(detected.source.as_deref(), Some("source"));
    }

    #[test]
    fn absent_roles_yield_none() {
        let detected = detect_columns(&columns(&["nom", "prenom", "email"]));
        assert_eq!(detected, DetectedColumns::default());
    }

    #[test]
    fn substring_matching_covers_prefixed_names() {
        let detected = detect_columns(&columns(&["numero_client", "origine_lead"]));
        assert_eq!(detected.phone.as_deref(), Some("numero_client"));
        assert_eq!(detected.source.as_deref(), Some("origine_lead"));
    }
}
