use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no phone column detected in {dataset} dataset")]
    NoPhoneColumn { dataset: String },
    #[error("no reference dataset loaded")]
    NoReferenceLoaded,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
