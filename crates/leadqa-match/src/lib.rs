//! Matching core: phone normalization, variant expansion, column detection,
//! reference indexing, reconciliation and aggregation.

pub mod aggregate;
pub mod columns;
pub mod engine;
pub mod index;
pub mod normalize;
pub mod session;
pub mod variants;

pub use aggregate::aggregate;
pub use columns::{DEFAULT_PHONE_COLUMN, DetectedColumns, detect_columns};
pub use engine::{STATUS_COLUMN, match_returns};
pub use index::{ReferenceIndex, ReferenceRecord};
pub use normalize::normalize_phone;
pub use session::AnalysisSession;
pub use variants::phone_variants;
