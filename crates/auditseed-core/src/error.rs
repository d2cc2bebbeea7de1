use thiserror::Error;

/// Core error type shared across auditseed crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A column specification violates internal invariants.
    #[error("invalid column spec: {0}")]
    InvalidColumn(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by auditseed crates.
pub type Result<T> = std::result::Result<T, Error>;
