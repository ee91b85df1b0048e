//! Readability and syntactic-complexity metrics for Russian text.
//!
//! This umbrella crate binds the workspace together: a shared [`Tokenizer`]
//! provides the plain and parsed representations, and a [`Calculator`]
//! evaluates a selection of metrics from one [`Catalog`] into an ordered
//! key to value mapping.
//!
//! ```
//! use std::sync::Arc;
//! use ru_readability::{Calculator, TokenizeConfig, Tokenizer};
//!
//! let tokenizer = Arc::new(Tokenizer::plain_only(TokenizeConfig::default()));
//! let calc = Calculator::with_metrics(
//!     ru_readability::Catalog::Composite,
//!     tokenizer,
//!     ["Flesh_Kincaid", "SMOG"],
//! );
//! let out = calc
//!     .compute("Жизнь пренеприятная штука, но сделать ее прекрасной очень нетрудно.")
//!     .unwrap();
//! assert_eq!(out.keys().copied().collect::<Vec<_>>(), vec!["Flesh_Kincaid", "SMOG"]);
//! ```

pub mod config;
mod service;

pub use config::{
    CalculatorYamlConfig, ConfigLoadError, ParserBackend, ParserYamlConfig, ReadabilityConfig,
};
pub use rr_metrics::{
    Catalog, Formula, Metric, MetricError, MetricValue, Requirement, TextStats,
    TokenizationService, indices, stats,
};
pub use rr_syntax::{
    DependencyParser, NoParser, ParseError, ParsedDocument, ParsedSentence, ParsedToken,
    StubParser, UdpipeConfig, UdpipeParser, decode_conllu,
};
pub use rr_tokenize::{PlainDocument, PlainTokenizer, TokenizeConfig, TokenizeError};
pub use service::Tokenizer;

use indexmap::IndexMap;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Level, debug, info, warn};

/// Metric key to value, in registry order.
pub type CalcOutput = IndexMap<&'static str, MetricValue>;

/// Errors returned by [`Calculator`].
#[derive(Debug)]
pub enum CalcError {
    /// A metric failed; the whole computation is abandoned.
    Metric {
        key: &'static str,
        source: MetricError,
    },
    /// Configuration could not be loaded.
    Config(ConfigLoadError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Metric { key, source } => write!(f, "metric {key} failed: {source}"),
            CalcError::Config(err) => write!(f, "configuration failure: {err}"),
        }
    }
}

impl Error for CalcError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CalcError::Metric { source, .. } => Some(source),
            CalcError::Config(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for CalcError {
    fn from(value: ConfigLoadError) -> Self {
        CalcError::Config(value)
    }
}

/// Observer for per-metric latency and outcome.
pub trait CalcObserver: Send + Sync {
    fn record_metric(&self, metric: Metric, latency: Duration, result: Result<(), &MetricError>);
}

/// Evaluates a fixed selection of metrics from one catalog.
#[derive(Clone)]
pub struct Calculator {
    catalog: Catalog,
    metrics: Vec<Metric>,
    service: Arc<dyn TokenizationService>,
    use_parallel: bool,
    observer: Option<Arc<dyn CalcObserver>>,
}

impl Calculator {
    /// Every metric of `catalog`.
    pub fn new(catalog: Catalog, service: Arc<dyn TokenizationService>) -> Self {
        Self::from_parts(catalog, catalog.metrics().to_vec(), service)
    }

    /// Only the listed keys that belong to `catalog`, in registry order.
    /// Unknown keys and keys of the other catalog are dropped; duplicates
    /// collapse.
    pub fn with_metrics<I, S>(catalog: Catalog, service: Arc<dyn TokenizationService>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: Vec<S> = keys.into_iter().collect();
        for key in &requested {
            if catalog.get(key.as_ref()).is_none() {
                debug!(key = key.as_ref(), catalog = %catalog, "metric_key_dropped");
            }
        }
        let metrics = catalog
            .metrics()
            .iter()
            .copied()
            .filter(|m| requested.iter().any(|key| key.as_ref() == m.key()))
            .collect();
        Self::from_parts(catalog, metrics, service)
    }

    pub fn elementary(service: Arc<dyn TokenizationService>) -> Self {
        Self::new(Catalog::Elementary, service)
    }

    pub fn composite(service: Arc<dyn TokenizationService>) -> Self {
        Self::new(Catalog::Composite, service)
    }

    /// Builds a calculator from the `calculator` section of a config.
    pub fn from_config(cfg: &ReadabilityConfig, service: Arc<dyn TokenizationService>) -> Self {
        let section = &cfg.calculator;
        let calc = match &section.metrics {
            Some(keys) => Self::with_metrics(section.catalog, service, keys),
            None => Self::new(section.catalog, service),
        };
        calc.with_parallel(section.use_parallel)
    }

    /// Loads a YAML config and builds both the tokenizer and the calculator.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CalcError> {
        let cfg = ReadabilityConfig::from_file(path)?;
        let tokenizer = Arc::new(Tokenizer::from_config(&cfg));
        Ok(Self::from_config(&cfg, tokenizer))
    }

    fn from_parts(catalog: Catalog, metrics: Vec<Metric>, service: Arc<dyn TokenizationService>) -> Self {
        Self {
            catalog,
            metrics,
            service,
            use_parallel: false,
            observer: None,
        }
    }

    /// Evaluate metrics on the rayon pool. Output order and values match
    /// sequential mode.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn CalcObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.metrics.iter().map(|m| m.key())
    }

    pub fn use_parallel(&self) -> bool {
        self.use_parallel
    }

    /// Computes every selected metric on `text`.
    ///
    /// Fails on the first metric error; no partial mapping is returned.
    pub fn compute(&self, text: &str) -> Result<CalcOutput, CalcError> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "ru_readability.compute",
            catalog = %self.catalog,
            text_len = text.len(),
            metric_count = self.metrics.len()
        );
        let _guard = span.enter();

        let result = if self.use_parallel {
            self.compute_parallel(text)
        } else {
            self.compute_sequential(text)
        };

        match &result {
            Ok(_) => info!(elapsed_micros = start.elapsed().as_micros(), "compute_success"),
            Err(err) => warn!(error = %err, "compute_failure"),
        }
        result
    }

    fn compute_sequential(&self, text: &str) -> Result<CalcOutput, CalcError> {
        self.metrics
            .iter()
            .map(|&metric| Ok((metric.key(), self.evaluate(metric, text)?)))
            .collect()
    }

    fn compute_parallel(&self, text: &str) -> Result<CalcOutput, CalcError> {
        let values: Vec<Result<MetricValue, CalcError>> = self
            .metrics
            .par_iter()
            .map(|&metric| self.evaluate(metric, text))
            .collect();

        // Reassemble in registry order so the first error reported is the
        // same one sequential mode would hit.
        self.metrics
            .iter()
            .zip(values)
            .map(|(metric, value)| Ok((metric.key(), value?)))
            .collect()
    }

    fn evaluate(&self, metric: Metric, text: &str) -> Result<MetricValue, CalcError> {
        let start = Instant::now();
        let result = metric.compute(self.service.as_ref(), text);
        if let Some(observer) = &self.observer {
            observer.record_metric(metric, start.elapsed(), result.as_ref().map(|_| ()));
        }
        result.map_err(|source| CalcError::Metric {
            key: metric.key(),
            source,
        })
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.keys().collect();
        write!(f, "Calculator with metrics [{}]", keys.join(", "))
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("catalog", &self.catalog)
            .field("metrics", &self.metrics)
            .field("use_parallel", &self.use_parallel)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
