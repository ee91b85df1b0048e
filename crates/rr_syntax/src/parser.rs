use crate::document::ParsedDocument;
use crate::error::ParseError;

/// A dependency parser producing the parsed representation of a text.
///
/// Implementations must be deterministic for identical input and must hand
/// back a freshly allocated document on every call. Any expensive setup
/// (model loading, binary lookup) belongs behind a one-time guard inside the
/// implementation.
pub trait DependencyParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<ParsedDocument, ParseError>;

    /// Short label for logs.
    fn name(&self) -> &str {
        "parser"
    }
}

/// Parser used when no dependency backend is configured.
///
/// Every call fails with [`ParseError::Unavailable`]; metrics that only need
/// the plain representation keep working.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParser;

impl DependencyParser for NoParser {
    fn parse(&self, _text: &str) -> Result<ParsedDocument, ParseError> {
        Err(ParseError::Unavailable(
            "no dependency parser configured".into(),
        ))
    }

    fn name(&self) -> &str {
        "none"
    }
}
