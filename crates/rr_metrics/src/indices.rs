//! Composite readability indices with Russian coefficients.
//!
//! Each plain index exists in two forms: one over a [`PlainDocument`] and a
//! `*_from_stats` form over precomputed [`TextStats`], so indices can be
//! checked against fixed counts. Any zero denominator makes the whole index
//! 0.0.

use rr_syntax::ParsedDocument;
use rr_tokenize::PlainDocument;
use serde::{Deserialize, Serialize};

use crate::error::MetricError;
use crate::stats;

/// Elementary plain statistics gathered in one pass over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub letters: usize,
    pub syllables: usize,
    pub polysyllables: usize,
}

impl TextStats {
    pub fn from_document(doc: &PlainDocument) -> Self {
        let mut out = Self {
            sentences: doc.sentences().len(),
            ..Self::default()
        };
        for word in doc.words() {
            let syllables = stats::syllable_count_word(word);
            out.words += 1;
            out.letters += word.chars().count();
            out.syllables += syllables;
            if syllables >= 3 {
                out.polysyllables += 1;
            }
        }
        out
    }

    /// Words per sentence, 0.0 without sentences.
    pub fn avg_sentence_len_words(&self) -> f64 {
        stats::ratio(self.words, self.sentences)
    }

    /// Characters per sentence, 0.0 without sentences.
    pub fn avg_sentence_len_chars(&self) -> f64 {
        stats::ratio(self.letters, self.sentences)
    }
}

pub fn flesch_kincaid(doc: &PlainDocument) -> f64 {
    flesch_kincaid_from_stats(&TextStats::from_document(doc))
}

/// `|206.835 - 1.3 * ASL - 60.1 * (syllables / words)|`
pub fn flesch_kincaid_from_stats(s: &TextStats) -> f64 {
    if s.words == 0 {
        return 0.0;
    }
    let asl = s.avg_sentence_len_words();
    (206.835 - 1.3 * asl - 60.1 * (s.syllables as f64 / s.words as f64)).abs()
}

pub fn coleman_liau(doc: &PlainDocument) -> f64 {
    coleman_liau_from_stats(&TextStats::from_document(doc))
}

/// `0.055 * L - 0.35 * S - 20.33`, with L letters and S sentences per 100 words.
pub fn coleman_liau_from_stats(s: &TextStats) -> f64 {
    if s.words == 0 {
        return 0.0;
    }
    let per_hundred = 100.0 / s.words as f64;
    0.055 * (s.letters as f64 * per_hundred) - 0.35 * (s.sentences as f64 * per_hundred) - 20.33
}

pub fn smog(doc: &PlainDocument) -> f64 {
    smog_from_stats(&TextStats::from_document(doc))
}

/// `1.1 * sqrt((64.6 / sentences) * polysyllables) + 0.05`
pub fn smog_from_stats(s: &TextStats) -> f64 {
    if s.sentences == 0 {
        return 0.0;
    }
    1.1 * ((64.6 / s.sentences as f64) * s.polysyllables as f64).sqrt() + 0.05
}

pub fn ari(doc: &PlainDocument) -> f64 {
    ari_from_stats(&TextStats::from_document(doc))
}

/// `6.26 * (letters / words) + 0.2805 * (words / sentences) - 31.04`
pub fn ari_from_stats(s: &TextStats) -> f64 {
    if s.words == 0 || s.sentences == 0 {
        return 0.0;
    }
    let words = s.words as f64;
    6.26 * (s.letters as f64 / words) + 0.2805 * (words / s.sentences as f64) - 31.04
}

/// `|-1.61 + 0.014 * SLC + 0.146 * DD + 0.057 * clauses|`
///
/// SLC (mean sentence length in characters) comes from the plain
/// representation; dependency distance and clause count from the parse.
/// A degenerate parse is an error, not 0.
pub fn syntax_complexity(
    plain: &PlainDocument,
    parsed: &ParsedDocument,
) -> Result<f64, MetricError> {
    let slc = stats::avg_sentence_len_chars(plain);
    let dd = stats::dependency_distance(parsed)?;
    let clauses = stats::clause_count(parsed);
    Ok(syntax_complexity_from_parts(slc, dd, clauses))
}

pub fn syntax_complexity_from_parts(slc: f64, dependency_distance: f64, clauses: usize) -> f64 {
    (-1.61 + 0.014 * slc + 0.146 * dependency_distance + 0.057 * clauses as f64).abs()
}
