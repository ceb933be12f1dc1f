//! The returns template handed to clients.

use std::path::Path;

use anyhow::{Context, Result};

/// Header row of the template.
pub const TEMPLATE_HEADERS: [&str; 3] = ["telephone", "status", "commentaire"];

/// Illustrative rows showing the accepted phone formats and statuses.
pub const TEMPLATE_ROWS: [[&str; 3]; 3] = [
    ["06 12 34 56 78", "invalide", "Numéro non attribué"],
    ["+33698765432", "doublon", "Client déjà en base"],
    ["0123456789", "autre", "Hors cible"],
];

pub fn write_template_csv(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("write template: {}", path.display()))?;
    writer
        .write_record(TEMPLATE_HEADERS)
        .with_context(|| format!("write template header: {}", path.display()))?;
    for row in TEMPLATE_ROWS {
        writer
            .write_record(row)
            .with_context(|| format!("write template row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush template: {}", path.display()))?;
    Ok(())
}
