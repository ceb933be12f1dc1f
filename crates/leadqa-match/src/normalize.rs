//! Phone normalization to the canonical national form.
//!
//! The canonical form for the supported dialing convention is a 10-character
//! digit string with a leading `0`. Normalization is total: input that cannot
//! be read as a phone number passes through and simply matches nothing
//! downstream.

/// International prefix of the supported dialing convention.
pub const COUNTRY_PREFIX: &str = "+33";

/// Bare country code digits, as they appear without a `+` or `00`.
pub const COUNTRY_CODE: &str = "33";

/// Length of a canonical national number.
pub const NATIONAL_LEN: usize = 10;

/// Normalizes one raw phone string into the canonical national form.
///
/// Strips separators, rewrites the `00` international prefix to `+`, folds
/// `+33`/`33` prefixes into the national leading `0`, and restores a leading
/// zero dropped by spreadsheet tools. Returns the input (separators stripped)
/// unchanged when none of the rules apply.
pub fn normalize_phone(raw: &str) -> String {
    let mut cleaned: String = raw
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '-' | '.' | '(' | ')'))
        .collect();
    if cleaned.is_empty() {
        return cleaned;
    }
    if let Some(rest) = cleaned.strip_prefix("00") {
        cleaned = format!("+{rest}");
    }
    if let Some(rest) = cleaned.strip_prefix(COUNTRY_PREFIX) {
        cleaned = format!("0{rest}");
    } else if (cleaned.len() == NATIONAL_LEN + 1 || cleaned.len() == NATIONAL_LEN + 2)
        && let Some(rest) = cleaned.strip_prefix(COUNTRY_CODE)
    {
        cleaned = format!("0{rest}");
    }
    if cleaned.len() == NATIONAL_LEN - 1 && !cleaned.starts_with('0') {
        cleaned = format!("0{cleaned}");
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_from_national_form() {
        assert_eq!(normalize_phone("06 12 34 56 78"), "0612345678");
        assert_eq!(normalize_phone("06-12-34-56-78"), "0612345678");
        assert_eq!(normalize_phone("06.12.34.56.78"), "0612345678");
        assert_eq!(normalize_phone("(06)12345678"), "0612345678");
    }

    #[test]
    fn folds_international_prefixes() {
        assert_eq!(normalize_phone("+33612345678"), "0612345678");
        assert_eq!(normalize_phone("+33 6 12 34 56 78"), "0612345678");
        assert_eq!(normalize_phone("0033612345678"), "0612345678");
        assert_eq!(normalize_phone("33612345678"), "0612345678");
    }

    #[test]
    fn restores_dropped_leading_zero() {
        assert_eq!(normalize_phone("612345678"), "0612345678");
    }

    #[test]
    fn bare_country_code_requires_plausible_length() {
        // 10 digits starting with 33 is already a national number.
        assert_eq!(normalize_phone("3312345678"), "3312345678");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("   "), "");
        assert_eq!(normalize_phone("n/a"), "n/a");
        assert_eq!(normalize_phone("12"), "12");
    }

    #[test]
    fn idempotent_on_canonical_form() {
        for raw in ["0612345678", "+33612345678", "06 12 34 56 78"] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once);
        }
    }
}
