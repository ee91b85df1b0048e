use rr_syntax::ParseError;
use rr_tokenize::TokenizeError;
use thiserror::Error;

use crate::metric::Requirement;

/// Errors returned while acquiring representations or applying a formula.
#[derive(Debug, Error)]
pub enum MetricError {
    #[error("plain tokenization failed: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("dependency parse failed: {0}")]
    Parse(#[from] ParseError),

    /// Dependency distance is undefined when a parse has no non-root tokens.
    #[error("degenerate parse: {tokens} tokens in {sentences} sentences leaves no dependency arcs")]
    DegenerateParse { tokens: usize, sentences: usize },

    #[error("metric {metric} needs the {required} representation")]
    RepresentationMismatch {
        metric: &'static str,
        required: Requirement,
    },
}
