use std::io;
use thiserror::Error;

/// Errors surfaced while producing or decoding a dependency parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No dependency parser is configured for this tokenizer.
    #[error("dependency parser unavailable: {0}")]
    Unavailable(String),
    /// The parser executable could not be located.
    #[error("parser binary not found: {0}")]
    BinaryNotFound(String),
    /// The parser model file could not be located.
    #[error("parser model not found: {0}")]
    ModelNotFound(String),
    /// Low-level IO failures while talking to the parser process.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The parser process exited unsuccessfully.
    #[error("parser process failed with {status}: {stderr}")]
    Process { status: String, stderr: String },
    /// The parser produced bytes that are not UTF-8.
    #[error("parser output is not valid utf-8: {0}")]
    InvalidOutput(String),
    /// A CoNLL-U line could not be decoded.
    #[error("malformed CoNLL-U at line {line}: {reason}")]
    Conllu { line: usize, reason: String },
    /// Token ids or heads do not form a valid sentence.
    #[error("invalid dependency tree: {0}")]
    InvalidTree(String),
}
