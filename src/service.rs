use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use rr_metrics::{MetricError, TokenizationService};
use rr_syntax::{DependencyParser, NoParser, ParsedDocument, StubParser, UdpipeParser};
use rr_tokenize::{PlainDocument, PlainTokenizer, TokenizeConfig, TokenizeError};
use tracing::debug;

use crate::config::{ParserBackend, ReadabilityConfig};

/// Shared tokenization resource.
///
/// Wrap it in an `Arc` and hand it to as many calculators and threads as
/// needed. The plain tokenizer is built on first use, exactly once; the
/// parser backend owns its own one-time setup.
pub struct Tokenizer {
    cfg: TokenizeConfig,
    plain: OnceCell<PlainTokenizer>,
    parser: Arc<dyn DependencyParser>,
}

impl Tokenizer {
    pub fn new(cfg: TokenizeConfig, parser: Arc<dyn DependencyParser>) -> Self {
        Self {
            cfg,
            plain: OnceCell::new(),
            parser,
        }
    }

    /// Tokenizer without a dependency parser. Parsed requests fail with
    /// [`rr_syntax::ParseError::Unavailable`].
    pub fn plain_only(cfg: TokenizeConfig) -> Self {
        Self::new(cfg, Arc::new(NoParser))
    }

    /// Builds the tokenizer and the configured parser backend.
    pub fn from_config(cfg: &ReadabilityConfig) -> Self {
        let parser: Arc<dyn DependencyParser> = match cfg.parser.backend {
            ParserBackend::None => Arc::new(NoParser),
            ParserBackend::Udpipe => Arc::new(UdpipeParser::new(cfg.parser.udpipe_config())),
            ParserBackend::Stub => Arc::new(StubParser::new(&cfg.tokenizer)),
        };
        Self::new(cfg.tokenizer.clone(), parser)
    }

    pub fn config(&self) -> &TokenizeConfig {
        &self.cfg
    }

    pub fn parser_name(&self) -> &str {
        self.parser.name()
    }

    /// Whether the plain tokenizer has been built yet.
    pub fn is_initialized(&self) -> bool {
        self.plain.get().is_some()
    }

    fn plain(&self) -> Result<&PlainTokenizer, TokenizeError> {
        self.plain.get_or_try_init(|| {
            debug!(
                version = self.cfg.version,
                extra_abbreviations = self.cfg.extra_abbreviations.len(),
                "plain_tokenizer_init"
            );
            PlainTokenizer::new(self.cfg.clone())
        })
    }
}

impl TokenizationService for Tokenizer {
    fn tokenize_words(&self, text: &str) -> Result<PlainDocument, MetricError> {
        Ok(self.plain()?.tokenize(text))
    }

    fn tokenize_parsed(&self, text: &str) -> Result<ParsedDocument, MetricError> {
        Ok(self.parser.parse(text)?)
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("cfg", &self.cfg)
            .field("initialized", &self.is_initialized())
            .field("parser", &self.parser.name())
            .finish()
    }
}
