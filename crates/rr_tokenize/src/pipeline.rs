use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizeConfig;
use crate::document::PlainDocument;
use crate::error::TokenizeError;
use crate::sentence::SentenceSplitter;
use crate::word::split_words;

/// Main entry point. Validates `cfg` and tokenizes `text` in one call.
///
/// Callers tokenizing many texts should build a [`PlainTokenizer`] once
/// instead, so the abbreviation table is compiled a single time.
pub fn tokenize_words(text: &str, cfg: &TokenizeConfig) -> Result<PlainDocument, TokenizeError> {
    Ok(PlainTokenizer::new(cfg.clone())?.tokenize(text))
}

/// Reusable tokenizer holding a validated config and a compiled splitter.
#[derive(Debug, Clone)]
pub struct PlainTokenizer {
    cfg: TokenizeConfig,
    splitter: SentenceSplitter,
}

impl PlainTokenizer {
    pub fn new(cfg: TokenizeConfig) -> Result<Self, TokenizeError> {
        cfg.validate()?;
        let splitter = SentenceSplitter::new(&cfg);
        Ok(Self { cfg, splitter })
    }

    pub fn config(&self) -> &TokenizeConfig {
        &self.cfg
    }

    /// Splits `text` into sentences of lowercase word tokens.
    ///
    /// Total over all inputs: empty or whitespace-only text yields an empty
    /// document.
    pub fn tokenize(&self, text: &str) -> PlainDocument {
        // Compose before splitting so letter counts are stable.
        let normalized: Cow<str> = if self.cfg.normalize_unicode {
            Cow::Owned(text.nfc().collect::<String>())
        } else {
            Cow::Borrowed(text)
        };

        let sentences = self
            .splitter
            .split(normalized.as_ref())
            .into_iter()
            .map(|sentence| split_words(sentence, self.cfg.join_hyphenated))
            .collect();

        PlainDocument::new(sentences)
    }
}
