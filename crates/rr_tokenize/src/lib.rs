//! Plain tokenization layer for Russian text.
//!
//! This crate turns raw text into the plain representation every counting
//! metric works on: an ordered list of sentences, each an ordered list of
//! lowercase word tokens with punctuation removed.
//!
//! ## What we do
//!
//! - Unicode normalization (NFC by default, configurable)
//! - Sentence splitting with Russian rules (abbreviations, initials,
//!   lowercase continuations, closing quotes)
//! - Word splitting on Unicode word boundaries, with hyphenated compounds
//!   kept whole
//! - Lowercasing and removal of tokens that do not start with a word character
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text and config give
//! the same document on any machine.

mod config;
mod document;
mod error;
mod pipeline;
mod sentence;
mod word;

pub use crate::config::TokenizeConfig;
pub use crate::document::{PlainDocument, Sentence};
pub use crate::error::TokenizeError;
pub use crate::pipeline::{tokenize_words, PlainTokenizer};
pub use crate::sentence::{SentenceSplitter, RUSSIAN_ABBREVIATIONS};
pub use crate::word::{is_word_like, split_words};
