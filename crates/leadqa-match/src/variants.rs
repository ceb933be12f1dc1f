//! Expansion of a phone number into every textual form either dataset may use.

use std::collections::BTreeSet;

use crate::normalize::{COUNTRY_CODE, COUNTRY_PREFIX, NATIONAL_LEN, normalize_phone};

/// Expands a raw phone string into the set of equivalent textual forms.
///
/// The baseline (see [`normalize_phone`]) is always a member. When the
/// baseline is a canonical national number, the set also covers the
/// pair-spaced human form, the number without its leading zero, and the
/// `+33`, `+33 `, `0033` and `33` international spellings.
///
/// An empty baseline yields a set containing only the empty string; callers
/// must treat that as "no usable phone" and skip the row.
pub fn phone_variants(raw: &str) -> BTreeSet<String> {
    let baseline = normalize_phone(raw);
    let mut variants = BTreeSet::new();
    if baseline.len() == NATIONAL_LEN && baseline.starts_with('0') {
        variants.insert(spaced_pairs(&baseline));
        let tail = &baseline[1..];
        variants.insert(tail.to_string());
        variants.insert(format!("{COUNTRY_PREFIX}{tail}"));
        variants.insert(format!("{COUNTRY_PREFIX} {tail}"));
        variants.insert(format!("00{COUNTRY_CODE}{tail}"));
        variants.insert(format!("{COUNTRY_CODE}{tail}"));
    }
    variants.insert(baseline);
    variants
}

/// Groups digits in pairs separated by single spaces: `0612345678` becomes
/// `06 12 34 56 78`.
fn spaced_pairs(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && idx % 2 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_number_expands_to_all_spellings() {
        let variants = phone_variants("0612345678");
        for expected in [
            "0612345678",
            "06 12 34 56 78",
            "612345678",
            "+33612345678",
            "+33 612345678",
            "0033612345678",
            "33612345678",
        ] {
            assert!(variants.contains(expected), "missing variant {expected}");
        }
        assert_eq!(variants.len(), 7);
    }

    #[test]
    fn expansion_starts_from_the_baseline() {
        // International input expands to the same set as its national form.
        assert_eq!(phone_variants("+33 6 12 34 56 78"), phone_variants("0612345678"));
    }

    #[test]
    fn unusable_phone_yields_only_the_empty_string() {
        let variants = phone_variants("");
        assert_eq!(variants.len(), 1);
        assert!(variants.contains(""));
    }

    #[test]
    fn non_canonical_baseline_is_not_expanded() {
        let variants = phone_variants("12345");
        assert_eq!(variants.len(), 1);
        assert!(variants.contains("12345"));
    }
}
