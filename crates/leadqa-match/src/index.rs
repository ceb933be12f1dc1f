//! Reverse index from phone variants to reference records.

use std::collections::HashMap;

use leadqa_model::{Dataset, Row, UNKNOWN_SOURCE};

use crate::variants::phone_variants;

/// A reference row enriched with the attributes matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    pub row: Row,
    pub original_phone: String,
    pub source: String,
}

/// Index over one reference dataset: every variant of every usable phone
/// points at its record.
///
/// Records are stored once; the variant map holds slots into that store, so a
/// record is reachable through its whole variant set without duplication.
/// When two rows share a variant, the later row wins.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    records: Vec<ReferenceRecord>,
    variants: HashMap<String, usize>,
    indexed_rows: usize,
}

impl ReferenceIndex {
    /// Builds the index in one pass over the dataset. Rows with a blank phone
    /// field are skipped entirely.
    pub fn build(dataset: &Dataset, phone_column: &str, source_column: Option<&str>) -> Self {
        let mut index = Self::default();
        for row in &dataset.rows {
            let Some(phone) = row.get(phone_column) else {
                continue;
            };
            let source = source_column
                .and_then(|column| row.get(column))
                .unwrap_or(UNKNOWN_SOURCE)
                .to_string();
            let slot = index.records.len();
            index.records.push(ReferenceRecord {
                row: row.clone(),
                original_phone: phone.to_string(),
                source,
            });
            for variant in phone_variants(phone) {
                index.variants.insert(variant, slot);
            }
            index.indexed_rows += 1;
        }
        tracing::debug!(
            rows = index.indexed_rows,
            variants = index.variants.len(),
            "reference index built"
        );
        index
    }

    /// Looks up one exact variant string.
    pub fn lookup(&self, variant: &str) -> Option<&ReferenceRecord> {
        self.variants.get(variant).map(|&slot| &self.records[slot])
    }

    /// Number of rows that contributed at least one index entry.
    pub fn indexed_rows(&self) -> usize {
        self.indexed_rows
    }

    /// Number of distinct variant keys.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
