use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metric::Metric;

const ELEMENTARY: &[Metric] = &[
    Metric::NumWords,
    Metric::NumSentences,
    Metric::AvgSentLen,
    Metric::NumLetters,
    Metric::AvgSentLenCh,
    Metric::NumSyll,
    Metric::NumPolysyl,
    Metric::DepDistance,
    Metric::NumClauses,
];

const COMPOSITE: &[Metric] = &[
    Metric::FleschKincaid,
    Metric::ColemanLiau,
    Metric::Smog,
    Metric::Ari,
    Metric::SyntaxComplexity,
];

/// The two fixed, disjoint metric sets a calculator can bind to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Catalog {
    /// Raw counts, averages and parse statistics.
    #[default]
    Elementary,
    /// Readability and syntactic-complexity indices.
    Composite,
}

impl Catalog {
    /// Metrics in registry order.
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            Catalog::Elementary => ELEMENTARY,
            Catalog::Composite => COMPOSITE,
        }
    }

    pub fn keys(self) -> impl Iterator<Item = &'static str> {
        self.metrics().iter().map(|m| m.key())
    }

    /// Finds `key` in this catalog only.
    pub fn get(self, key: &str) -> Option<Metric> {
        self.metrics().iter().copied().find(|m| m.key() == key)
    }

    pub fn contains(self, metric: Metric) -> bool {
        self.metrics().contains(&metric)
    }

    pub fn name(self) -> &'static str {
        match self {
            Catalog::Elementary => "elementary",
            Catalog::Composite => "composite",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
