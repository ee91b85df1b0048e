use unicode_segmentation::UnicodeSegmentation;

const HYPHENS: &[&str] = &["-", "\u{2010}", "\u{2011}"];

/// Returns `true` when the token starts with a word character.
///
/// Word characters are Unicode alphanumerics and `_`. Tokens that open with
/// anything else (punctuation, symbols, emoji) are not words.
pub fn is_word_like(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
}

/// Splits one sentence into lowercase word tokens.
///
/// Segmentation follows the Unicode word-boundary rules (UAX #29); segments
/// that are not word-like are dropped. With `join_hyphenated`, a hyphen glued
/// on both sides to words keeps them as a single token (`кто-нибудь`).
pub fn split_words(sentence: &str, join_hyphenated: bool) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut last_was_word = false;
    let mut pending_hyphen = false;

    for segment in sentence.split_word_bounds() {
        if is_word_like(segment) {
            let lower = segment.to_lowercase();
            match words.last_mut() {
                Some(last) if pending_hyphen => {
                    last.push('-');
                    last.push_str(&lower);
                }
                _ => words.push(lower),
            }
            last_was_word = true;
            pending_hyphen = false;
        } else {
            pending_hyphen = join_hyphenated && last_was_word && HYPHENS.contains(&segment);
            last_was_word = false;
        }
    }

    words
}
