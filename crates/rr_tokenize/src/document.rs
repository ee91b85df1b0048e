use serde::{Deserialize, Serialize};

/// A sentence as an ordered list of lowercase word tokens.
pub type Sentence = Vec<String>;

/// Plain tokenized representation of a text.
///
/// Sentences keep source order and tokens keep reading order. Every token is
/// lowercase and starts with a word character; punctuation never survives.
/// A sentence may be empty when all of its tokens were punctuation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PlainDocument {
    sentences: Vec<Sentence>,
}

impl PlainDocument {
    /// Wraps already tokenized sentences.
    ///
    /// No normalization happens here; callers injecting fixed token lists
    /// (tests, precomputed corpora) are trusted to pass lowercase word tokens.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Iterates over every token of every sentence in reading order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences
            .iter()
            .flat_map(|sentence| sentence.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }
}

impl From<Vec<Sentence>> for PlainDocument {
    fn from(sentences: Vec<Sentence>) -> Self {
        Self::new(sentences)
    }
}

impl<'a> FromIterator<Vec<&'a str>> for PlainDocument {
    fn from_iter<I: IntoIterator<Item = Vec<&'a str>>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|sentence| sentence.into_iter().map(str::to_owned).collect())
                .collect(),
        )
    }
}
