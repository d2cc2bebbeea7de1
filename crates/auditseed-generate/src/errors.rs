use thiserror::Error;

/// Errors emitted by the augmentation engine.
#[derive(Debug, Error)]
pub enum AugmentError {
    #[error("invalid column spec: {0}")]
    Spec(#[from] auditseed_core::Error),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
