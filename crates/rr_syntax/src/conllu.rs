//! CoNLL-U decoding.
//!
//! Only the columns the metrics need are kept (ID, FORM, LEMMA, UPOS, HEAD,
//! DEPREL). Comment lines, multiword token ranges (`3-4`) and empty nodes
//! (`5.1`) are skipped; a blank line closes a sentence.

use crate::document::{ParsedDocument, ParsedSentence, ParsedToken};
use crate::error::ParseError;

const COLUMNS: usize = 10;

/// Decodes CoNLL-U text into a [`ParsedDocument`].
pub fn decode_conllu(input: &str) -> Result<ParsedDocument, ParseError> {
    let mut sentences = Vec::new();
    let mut current: Vec<ParsedToken> = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim_end_matches('\r');

        if line.trim().is_empty() {
            close_sentence(&mut current, &mut sentences)?;
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() != COLUMNS {
            return Err(ParseError::Conllu {
                line: line_no,
                reason: format!(
                    "expected {COLUMNS} tab-separated columns, found {}",
                    cols.len()
                ),
            });
        }

        let id_field = cols[0];
        if id_field.contains('-') || id_field.contains('.') {
            continue;
        }

        let id = parse_index(id_field, "ID", line_no)?;
        let head = parse_index(cols[6], "HEAD", line_no)?;
        current.push(ParsedToken::new(id, cols[1], head, cols[7]).with_tags(cols[2], cols[3]));
    }

    close_sentence(&mut current, &mut sentences)?;
    Ok(ParsedDocument::new(sentences))
}

fn close_sentence(
    current: &mut Vec<ParsedToken>,
    sentences: &mut Vec<ParsedSentence>,
) -> Result<(), ParseError> {
    if current.is_empty() {
        return Ok(());
    }
    let tokens = std::mem::take(current);
    sentences.push(ParsedSentence::new(tokens)?);
    Ok(())
}

fn parse_index(field: &str, column: &str, line: usize) -> Result<usize, ParseError> {
    field.parse::<usize>().map_err(|_| ParseError::Conllu {
        line,
        reason: format!("{column} column must be a non-negative integer, got {field:?}"),
    })
}
