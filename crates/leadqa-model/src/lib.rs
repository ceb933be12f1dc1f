pub mod dataset;
pub mod error;
pub mod outcome;
pub mod report;

pub use dataset::{Dataset, Row};
pub use error::{AnalysisError, Result};
pub use outcome::{
    DEFAULT_STATUS, MatchOutcome, STATUS_DUPLICATE, STATUS_INVALID, STATUS_OTHER, UNKNOWN_SOURCE,
};
pub use report::{AnalysisReport, SourceBreakdown, UnmatchedRecord};
