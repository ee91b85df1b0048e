use rr_syntax::ParsedDocument;
use rr_tokenize::PlainDocument;

use crate::error::MetricError;

/// Source of both text representations.
///
/// Implementations are shared across calculators and threads. Both methods
/// must be deterministic, return a freshly built document on every call and
/// have no side effects beyond one-time lazy initialization of their own
/// resources.
pub trait TokenizationService: Send + Sync {
    /// Sentences of lowercase word tokens, punctuation removed.
    fn tokenize_words(&self, text: &str) -> Result<PlainDocument, MetricError>;

    /// Dependency parse with per-token relations and distances.
    fn tokenize_parsed(&self, text: &str) -> Result<ParsedDocument, MetricError>;
}
