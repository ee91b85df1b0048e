use fxhash::FxHashSet;

use crate::config::TokenizeConfig;

/// Abbreviations that never end a sentence when followed by a single period.
///
/// Stored without the trailing period. Multi-part forms keep their inner
/// periods (`т.е`), and the single letters cover spaced forms like `т. е.`.
pub const RUSSIAN_ABBREVIATIONS: &[&str] = &[
    "т.е", "т.д", "т.п", "т.к", "т.н", "т.о", "и.о", "н.э", "т", "е", "д", "п", "к",
    "н", "г", "гг", "в", "вв", "др", "пр", "см", "ср", "стр", "рис", "табл", "гл", "ч", "ст",
    "ул", "пер", "просп", "пл", "кв", "корп", "обл", "им", "проф", "акад", "доц", "канд",
    "тыс", "млн", "млрд", "руб", "коп", "долл", "напр", "англ", "лат", "греч", "франц", "нем",
    "ок", "мин", "сек", "max", "min", "etc", "vs",
];

const TERMINATORS: &[char] = &['.', '!', '?', '…'];
const CLOSERS: &[char] = &['"', '\'', '»', '”', '’', ')', ']'];
const DASHES: &[char] = &['—', '–', '-'];

/// Splits raw text into sentence slices using Russian punctuation rules.
///
/// A run of terminators (plus trailing closing quotes or brackets) ends a
/// sentence when it is followed by whitespace or the end of text, unless a
/// lone period closes a known abbreviation or an initial, or the next word
/// starts with a lowercase letter.
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: FxHashSet<String>,
    split_on_blank_lines: bool,
}

impl SentenceSplitter {
    pub fn new(cfg: &TokenizeConfig) -> Self {
        let abbreviations = RUSSIAN_ABBREVIATIONS
            .iter()
            .map(|abbr| (*abbr).to_string())
            .chain(
                cfg.extra_abbreviations
                    .iter()
                    .map(|abbr| abbr.trim().trim_end_matches('.').to_lowercase()),
            )
            .collect();

        Self {
            abbreviations,
            split_on_blank_lines: cfg.split_on_blank_lines,
        }
    }

    /// Returns trimmed, non-empty sentence slices in source order.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        if self.split_on_blank_lines {
            for block in blank_line_blocks(text) {
                self.split_block(block, &mut sentences);
            }
        } else {
            self.split_block(text, &mut sentences);
        }
        sentences
    }

    fn split_block<'a>(&self, text: &'a str, out: &mut Vec<&'a str>) {
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if !TERMINATORS.contains(&ch) {
                continue;
            }

            // Swallow the rest of the terminator run ("?!", "...") and closers.
            let mut end = idx + ch.len_utf8();
            let mut lone_period = ch == '.';
            while let Some(&(next_idx, next)) = chars.peek() {
                if TERMINATORS.contains(&next) {
                    lone_period = false;
                } else if !CLOSERS.contains(&next) {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }

            let rest = &text[end..];
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                continue;
            }
            if lone_period && self.closes_abbreviation(&text[start..idx]) {
                continue;
            }
            if next_word_is_lowercase(rest) {
                continue;
            }

            push_trimmed(out, &text[start..end]);
            start = end;
        }

        push_trimmed(out, &text[start..]);
    }

    /// Whether the word right before a period is an abbreviation or initial.
    fn closes_abbreviation(&self, before: &str) -> bool {
        let Some(last) = before.rsplit(char::is_whitespace).next() else {
            return false;
        };
        let word = last.trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return false;
        }

        let mut letters = word.chars();
        if let (Some(first), None) = (letters.next(), letters.next()) {
            if first.is_uppercase() {
                return true;
            }
        }

        self.abbreviations.contains(&word.to_lowercase())
    }
}

fn next_word_is_lowercase(rest: &str) -> bool {
    // Dialogue dashes sit between a quote and its attribution: «Стой!» — крикнул он.
    rest.trim_start_matches(|c: char| c.is_whitespace() || DASHES.contains(&c))
        .chars()
        .next()
        .is_some_and(char::is_lowercase)
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, sentence: &'a str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        out.push(sentence);
    }
}

/// Cuts text at lines that contain only whitespace.
fn blank_line_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut block_start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            blocks.push(&text[block_start..offset]);
            block_start = offset + line.len();
        }
        offset += line.len();
    }
    blocks.push(&text[block_start..]);

    blocks
}
