//! Elementary statistics over the plain and parsed representations.
//!
//! Every function is total: empty documents give 0, and averages over zero
//! sentences give 0.0. The one exception is [`dependency_distance`], which
//! has no meaningful value without dependency arcs and reports
//! [`MetricError::DegenerateParse`] instead.

use rr_syntax::ParsedDocument;
use rr_tokenize::PlainDocument;

use crate::error::MetricError;

/// Russian vowel letters; each one is a syllable nucleus.
pub const RUSSIAN_VOWELS: &[char] = &['а', 'у', 'о', 'ы', 'и', 'э', 'я', 'ю', 'ё', 'е'];

/// Relations that introduce a (clausal) subject.
const SUBJECT_RELATIONS: &[&str] = &["nsubj", "csubj"];

/// Number of words, or only words with at least `min_syllables` syllables
/// when the threshold is non-zero.
pub fn word_count(doc: &PlainDocument, min_syllables: usize) -> usize {
    if min_syllables == 0 {
        return doc.words().count();
    }
    doc.words()
        .filter(|word| syllable_count_word(word) >= min_syllables)
        .count()
}

pub fn sentence_count(doc: &PlainDocument) -> usize {
    doc.sentences().len()
}

/// Mean sentence length in words.
pub fn avg_sentence_len_words(doc: &PlainDocument) -> f64 {
    ratio(word_count(doc, 0), sentence_count(doc))
}

/// Total number of characters (code points) across all words.
pub fn letter_count(doc: &PlainDocument) -> usize {
    doc.words().map(|word| word.chars().count()).sum()
}

/// Mean sentence length in characters.
pub fn avg_sentence_len_chars(doc: &PlainDocument) -> f64 {
    let per_sentence: usize = doc
        .sentences()
        .iter()
        .map(|sentence| sentence.iter().map(|w| w.chars().count()).sum::<usize>())
        .sum();
    ratio(per_sentence, sentence_count(doc))
}

/// Vowel-based syllable estimate. Expects lowercase input, which the plain
/// tokenizer guarantees.
pub fn syllable_count_word(word: &str) -> usize {
    word.chars().filter(|c| RUSSIAN_VOWELS.contains(c)).count()
}

pub fn syllable_count(doc: &PlainDocument) -> usize {
    doc.words().map(syllable_count_word).sum()
}

/// Words of three or more syllables.
pub fn polysyllable_count(doc: &PlainDocument) -> usize {
    word_count(doc, 3)
}

/// Mean head distance over all non-root tokens.
///
/// The sum of per-token distances (root tokens contribute 0, punctuation
/// counts like any other token) is divided by `tokens - sentences`.
pub fn dependency_distance(doc: &ParsedDocument) -> Result<f64, MetricError> {
    let tokens = doc.token_count();
    let sentences = doc.sentence_count();
    let arcs = tokens
        .checked_sub(sentences)
        .filter(|arcs| *arcs > 0)
        .ok_or(MetricError::DegenerateParse { tokens, sentences })?;

    let total: usize = doc.tokens().map(|t| t.dependency_distance).sum();
    Ok(total as f64 / arcs as f64)
}

/// Number of tokens attached as a nominal or clausal subject, subtypes
/// included (`nsubj:pass`, `csubj:pass`).
pub fn clause_count(doc: &ParsedDocument) -> usize {
    doc.tokens()
        .filter(|token| SUBJECT_RELATIONS.contains(&token.base_relation()))
        .count()
}

pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
