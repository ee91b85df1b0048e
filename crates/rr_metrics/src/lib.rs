//! rr_metrics: readability formulas and metric dispatch for Russian text.
//!
//! The crate is pure computation. Representations come from a
//! [`TokenizationService`]; this crate never tokenizes or parses by itself.
//!
//! - [`stats`]: elementary counts and averages over either representation
//! - [`indices`]: Flesch-Kincaid, Coleman-Liau, SMOG, ARI and syntactic
//!   complexity with Russian coefficients
//! - [`Metric`]: one variant per metric, each tagged with the representation
//!   it needs, computed by acquiring that representation and then applying
//!   the formula
//! - [`Catalog`]: the elementary and composite metric sets in fixed order
//!
//! ```
//! use rr_metrics::{indices, TextStats};
//!
//! let stats = TextStats { words: 9, sentences: 1, letters: 57, syllables: 22, polysyllables: 3 };
//! let fk = indices::flesch_kincaid_from_stats(&stats);
//! assert!((fk - 48.2239).abs() < 1e-3);
//! ```

mod error;
pub mod indices;
mod metric;
mod registry;
mod service;
pub mod stats;

pub use crate::error::MetricError;
pub use crate::indices::TextStats;
pub use crate::metric::{Formula, Metric, MetricValue, Requirement};
pub use crate::registry::Catalog;
pub use crate::service::TokenizationService;
