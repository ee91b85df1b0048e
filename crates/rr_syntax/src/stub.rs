use rr_tokenize::{SentenceSplitter, TokenizeConfig};
use unicode_segmentation::UnicodeSegmentation;

use crate::document::{ParsedDocument, ParsedSentence, ParsedToken};
use crate::error::ParseError;
use crate::parser::DependencyParser;

/// Deterministic parser for tests and offline runs without a model.
///
/// Sentences come from the plain sentence splitter and tokens from Unicode
/// word boundaries (punctuation included). Each sentence becomes a chain:
/// the first token is the root and every later token depends on the one
/// before it with relation `dep`, so every non-root distance is 1 and no
/// clauses are detected.
#[derive(Debug, Clone)]
pub struct StubParser {
    splitter: SentenceSplitter,
}

impl StubParser {
    pub fn new(cfg: &TokenizeConfig) -> Self {
        Self {
            splitter: SentenceSplitter::new(cfg),
        }
    }
}

impl Default for StubParser {
    fn default() -> Self {
        Self::new(&TokenizeConfig::default())
    }
}

impl DependencyParser for StubParser {
    fn parse(&self, text: &str) -> Result<ParsedDocument, ParseError> {
        let sentences = self
            .splitter
            .split(text)
            .into_iter()
            .map(chain_sentence)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ParsedDocument::new(sentences))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

fn chain_sentence(sentence: &str) -> Result<ParsedSentence, ParseError> {
    let tokens = sentence
        .split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .enumerate()
        .map(|(idx, form)| match idx {
            0 => ParsedToken::new(1, form, 0, "root"),
            _ => ParsedToken::new(idx + 1, form, idx, "dep"),
        })
        .collect();
    ParsedSentence::new(tokens)
}
