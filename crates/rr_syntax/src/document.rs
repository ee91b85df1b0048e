use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A syntactic word with its dependency arc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedToken {
    /// 1-based position within the sentence.
    pub id: usize,
    /// Surface form.
    pub form: String,
    /// Lemma, `_` when the parser did not provide one.
    pub lemma: String,
    /// Universal part-of-speech tag, `_` when absent.
    pub upos: String,
    /// Id of the syntactic head; 0 marks the sentence root.
    pub head: usize,
    /// Universal Dependencies relation label, possibly with a subtype (`nsubj:pass`).
    pub deprel: String,
    /// Linear distance to the head (`|head - id|`), 0 for the root.
    pub dependency_distance: usize,
}

impl ParsedToken {
    /// Builds a token and precomputes its dependency distance.
    pub fn new(id: usize, form: impl Into<String>, head: usize, deprel: impl Into<String>) -> Self {
        let dependency_distance = if head == 0 { 0 } else { id.abs_diff(head) };
        Self {
            id,
            form: form.into(),
            lemma: "_".into(),
            upos: "_".into(),
            head,
            deprel: deprel.into(),
            dependency_distance,
        }
    }

    pub fn with_tags(mut self, lemma: impl Into<String>, upos: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self.upos = upos.into();
        self
    }

    pub fn is_root(&self) -> bool {
        self.head == 0
    }

    /// Relation label without its subtype: `nsubj:pass` -> `nsubj`.
    pub fn base_relation(&self) -> &str {
        match self.deprel.split_once(':') {
            Some((base, _)) => base,
            None => &self.deprel,
        }
    }
}

/// One parsed sentence; token order matches surface order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedSentence {
    tokens: Vec<ParsedToken>,
}

impl ParsedSentence {
    /// Validates that ids run `1..=n` in order and every head points inside
    /// the sentence (or is the root marker 0).
    pub fn new(tokens: Vec<ParsedToken>) -> Result<Self, ParseError> {
        let len = tokens.len();
        for (idx, token) in tokens.iter().enumerate() {
            if token.id != idx + 1 {
                return Err(ParseError::InvalidTree(format!(
                    "token id {} out of sequence, expected {}",
                    token.id,
                    idx + 1
                )));
            }
            if token.head > len {
                return Err(ParseError::InvalidTree(format!(
                    "token {} points to head {} outside a sentence of {len} tokens",
                    token.id, token.head
                )));
            }
            if token.head == token.id {
                return Err(ParseError::InvalidTree(format!(
                    "token {} is its own head",
                    token.id
                )));
            }
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[ParsedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Dependency-parsed representation of a whole text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedDocument {
    sentences: Vec<ParsedSentence>,
}

impl ParsedDocument {
    pub fn new(sentences: Vec<ParsedSentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[ParsedSentence] {
        &self.sentences
    }

    /// All tokens of the document in surface order.
    pub fn tokens(&self) -> impl Iterator<Item = &ParsedToken> + '_ {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(ParsedSentence::len).sum()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}
