use std::fmt;

use rr_syntax::ParsedDocument;
use rr_tokenize::PlainDocument;
use serde::{Deserialize, Serialize};

use crate::error::MetricError;
use crate::indices;
use crate::registry::Catalog;
use crate::service::TokenizationService;
use crate::stats;

/// Which representation(s) a metric reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Plain,
    Parsed,
    Both,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Requirement::Plain => "plain",
            Requirement::Parsed => "parsed",
            Requirement::Both => "plain+parsed",
        })
    }
}

/// Scalar value of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Index(f64),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Index(v) => v,
        }
    }

    pub fn as_count(self) -> Option<usize> {
        match self {
            MetricValue::Count(n) => Some(n),
            MetricValue::Index(_) => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Index(v) => write!(f, "{v}"),
        }
    }
}

/// A metric's formula tagged with the representation it consumes.
#[derive(Clone, Copy)]
pub enum Formula {
    Plain(fn(&PlainDocument) -> MetricValue),
    Parsed(fn(&ParsedDocument) -> Result<MetricValue, MetricError>),
    Both(fn(&PlainDocument, &ParsedDocument) -> Result<MetricValue, MetricError>),
}

impl Formula {
    pub fn requirement(&self) -> Requirement {
        match self {
            Formula::Plain(_) => Requirement::Plain,
            Formula::Parsed(_) => Requirement::Parsed,
            Formula::Both(_) => Requirement::Both,
        }
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Formula::{:?}", self.requirement())
    }
}

/// Every metric the workspace knows, elementary first, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    NumWords,
    NumSentences,
    AvgSentLen,
    NumLetters,
    AvgSentLenCh,
    NumSyll,
    NumPolysyl,
    DepDistance,
    NumClauses,
    FleschKincaid,
    ColemanLiau,
    Smog,
    Ari,
    SyntaxComplexity,
}

impl Metric {
    pub const ALL: [Metric; 14] = [
        Metric::NumWords,
        Metric::NumSentences,
        Metric::AvgSentLen,
        Metric::NumLetters,
        Metric::AvgSentLenCh,
        Metric::NumSyll,
        Metric::NumPolysyl,
        Metric::DepDistance,
        Metric::NumClauses,
        Metric::FleschKincaid,
        Metric::ColemanLiau,
        Metric::Smog,
        Metric::Ari,
        Metric::SyntaxComplexity,
    ];

    /// Key used in result mappings and configuration files.
    pub fn key(self) -> &'static str {
        match self {
            Metric::NumWords => "num_words",
            Metric::NumSentences => "num_sentences",
            Metric::AvgSentLen => "avg_sent_len",
            Metric::NumLetters => "num_letters",
            Metric::AvgSentLenCh => "avg_sent_len_ch",
            Metric::NumSyll => "num_syll",
            Metric::NumPolysyl => "num_polysyl",
            Metric::DepDistance => "dep_distance",
            Metric::NumClauses => "num_clauses",
            Metric::FleschKincaid => "Flesh_Kincaid",
            Metric::ColemanLiau => "Coleman_Liau",
            Metric::Smog => "SMOG",
            Metric::Ari => "ARI",
            Metric::SyntaxComplexity => "Syntax_compl",
        }
    }

    /// Looks a key up across both catalogs. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn catalog(self) -> Catalog {
        match self {
            Metric::FleschKincaid
            | Metric::ColemanLiau
            | Metric::Smog
            | Metric::Ari
            | Metric::SyntaxComplexity => Catalog::Composite,
            _ => Catalog::Elementary,
        }
    }

    pub fn requirement(self) -> Requirement {
        self.formula().requirement()
    }

    pub fn formula(self) -> Formula {
        match self {
            Metric::NumWords => Formula::Plain(|d| MetricValue::Count(stats::word_count(d, 0))),
            Metric::NumSentences => Formula::Plain(|d| MetricValue::Count(stats::sentence_count(d))),
            Metric::AvgSentLen => {
                Formula::Plain(|d| MetricValue::Index(stats::avg_sentence_len_words(d)))
            }
            Metric::NumLetters => Formula::Plain(|d| MetricValue::Count(stats::letter_count(d))),
            Metric::AvgSentLenCh => {
                Formula::Plain(|d| MetricValue::Index(stats::avg_sentence_len_chars(d)))
            }
            Metric::NumSyll => Formula::Plain(|d| MetricValue::Count(stats::syllable_count(d))),
            Metric::NumPolysyl => {
                Formula::Plain(|d| MetricValue::Count(stats::polysyllable_count(d)))
            }
            Metric::DepDistance => {
                Formula::Parsed(|p| stats::dependency_distance(p).map(MetricValue::Index))
            }
            Metric::NumClauses => Formula::Parsed(|p| Ok(MetricValue::Count(stats::clause_count(p)))),
            Metric::FleschKincaid => {
                Formula::Plain(|d| MetricValue::Index(indices::flesch_kincaid(d)))
            }
            Metric::ColemanLiau => Formula::Plain(|d| MetricValue::Index(indices::coleman_liau(d))),
            Metric::Smog => Formula::Plain(|d| MetricValue::Index(indices::smog(d))),
            Metric::Ari => Formula::Plain(|d| MetricValue::Index(indices::ari(d))),
            Metric::SyntaxComplexity => Formula::Both(|d, p| {
                indices::syntax_complexity(d, p).map(MetricValue::Index)
            }),
        }
    }

    /// Acquires the representation(s) this metric needs from `service`, then
    /// applies the formula. Nothing is cached between calls.
    pub fn compute<S>(self, service: &S, text: &str) -> Result<MetricValue, MetricError>
    where
        S: TokenizationService + ?Sized,
    {
        match self.formula() {
            Formula::Plain(f) => {
                let doc = service.tokenize_words(text)?;
                Ok(f(&doc))
            }
            Formula::Parsed(f) => {
                let parsed = service.tokenize_parsed(text)?;
                f(&parsed)
            }
            Formula::Both(f) => {
                let doc = service.tokenize_words(text)?;
                let parsed = service.tokenize_parsed(text)?;
                f(&doc, &parsed)
            }
        }
    }

    /// Applies a plain-only formula to an already tokenized document.
    pub fn evaluate_plain(self, doc: &PlainDocument) -> Result<MetricValue, MetricError> {
        match self.formula() {
            Formula::Plain(f) => Ok(f(doc)),
            _ => Err(self.mismatch()),
        }
    }

    /// Applies a parse-only formula to an already parsed document.
    pub fn evaluate_parsed(self, parsed: &ParsedDocument) -> Result<MetricValue, MetricError> {
        match self.formula() {
            Formula::Parsed(f) => f(parsed),
            _ => Err(self.mismatch()),
        }
    }

    /// Applies any formula given both representations; each formula reads
    /// only what it needs.
    pub fn evaluate_both(
        self,
        doc: &PlainDocument,
        parsed: &ParsedDocument,
    ) -> Result<MetricValue, MetricError> {
        match self.formula() {
            Formula::Plain(f) => Ok(f(doc)),
            Formula::Parsed(f) => f(parsed),
            Formula::Both(f) => f(doc, parsed),
        }
    }

    fn mismatch(self) -> MetricError {
        MetricError::RepresentationMismatch {
            metric: self.key(),
            required: self.requirement(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
