use thiserror::Error;

/// Errors that can occur during tokenization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
