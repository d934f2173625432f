use thiserror::Error;

/// Core error type shared across Palengke crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset violates internal invariants.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Palengke crates.
pub type Result<T> = std::result::Result<T, Error>;
