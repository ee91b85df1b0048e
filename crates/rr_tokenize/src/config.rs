//! Configuration types for the plain tokenizer.
//!
//! This module defines [`TokenizeConfig`], which controls how raw Russian text
//! is split into sentences and word tokens.
//!
//! # Versioning
//!
//! The `version` field tracks tokenization behavior. Any change that can move
//! a sentence boundary or a token edge (even a bug fix) must bump it, since
//! every downstream count depends on the segmentation.
//!
//! # Examples
//!
//! ```rust
//! use rr_tokenize::TokenizeConfig;
//!
//! let config = TokenizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.normalize_unicode);
//! assert!(config.join_hyphenated);
//! assert!(!config.split_on_blank_lines);
//! ```
//!
//! ## Extra abbreviations
//!
//! ```rust
//! use rr_tokenize::TokenizeConfig;
//!
//! let config = TokenizeConfig {
//!     extra_abbreviations: vec!["мкр".into(), "обл".into()],
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TokenizeError;

/// Configuration for the plain tokenizer.
///
/// Cheap to clone and serializable for configuration management:
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": true,
///   "join_hyphenated": true,
///   "split_on_blank_lines": false,
///   "extra_abbreviations": []
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenizeConfig {
    /// Version of the tokenization rules.
    ///
    /// Must be >= 1. Version 0 is reserved and rejected with
    /// [`TokenizeError::InvalidConfig`].
    pub version: u32,

    /// Apply Unicode NFC normalization before segmentation.
    ///
    /// Composes decomposed letters (`е` + combining diaeresis -> `ё`) so they
    /// count as one character. Compatibility symbols such as `№` are left
    /// alone and never become word characters.
    pub normalize_unicode: bool,

    /// Re-join hyphenated compounds (`что-то`, `Ростов-на-Дону`) that the
    /// Unicode word-boundary rules split apart.
    pub join_hyphenated: bool,

    /// Treat an empty line as a sentence boundary even without a terminator.
    ///
    /// Useful for headings and list items. Off by default.
    pub split_on_blank_lines: bool,

    /// Abbreviations (without the trailing period, case-insensitive) that
    /// never end a sentence, in addition to the built-in Russian list.
    pub extra_abbreviations: Vec<String>,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            join_hyphenated: true,
            split_on_blank_lines: false,
            extra_abbreviations: Vec::new(),
        }
    }
}

impl TokenizeConfig {
    /// Checks invariants that cannot be expressed in the type.
    pub fn validate(&self) -> Result<(), TokenizeError> {
        if self.version == 0 {
            return Err(TokenizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if let Some(bad) = self
            .extra_abbreviations
            .iter()
            .find(|abbr| abbr.trim().is_empty() || abbr.chars().any(char::is_whitespace))
        {
            return Err(TokenizeError::InvalidConfig(format!(
                "abbreviation {bad:?} must be a single non-empty word"
            )));
        }
        Ok(())
    }
}
