//! YAML configuration for building a tokenizer and a calculator.
//!
//! One file describes the plain tokenizer, the dependency parser backend and
//! the calculator selection. Every section is optional; a file holding only
//! `version: "1.0"` selects the elementary catalog with no parser.
//!
//! `dep_distance`, `num_clauses` and `Syntax_compl` read a dependency parse.
//! They need `parser.backend` set to `udpipe` or `stub`; with the default
//! `none` backend they fail with a parse-unavailable error.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "school-texts"
//!
//! tokenizer:
//!   version: 1
//!   normalize_unicode: true
//!   join_hyphenated: true
//!   split_on_blank_lines: false
//!   extra_abbreviations: ["мкр"]
//!
//! parser:
//!   backend: "udpipe"
//!   binary: "udpipe"
//!   model_path: "./models/russian-syntagrus-ud-2.5-191206.udpipe"
//!   extra_args: []
//!   env_overrides: true
//!
//! calculator:
//!   catalog: "composite"
//!   metrics: ["Flesh_Kincaid", "SMOG"]
//!   use_parallel: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rr_metrics::Catalog;
use rr_syntax::UdpipeConfig;
use rr_tokenize::TokenizeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ReadabilityConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Plain tokenizer settings
    #[serde(default)]
    pub tokenizer: TokenizeConfig,

    /// Dependency parser backend
    #[serde(default)]
    pub parser: ParserYamlConfig,

    /// Metric selection and evaluation options
    #[serde(default)]
    pub calculator: CalculatorYamlConfig,
}

impl ReadabilityConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ReadabilityConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.tokenizer
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("tokenizer: {e}")))?;
        self.parser.validate()?;
        self.calculator.validate()?;

        Ok(())
    }
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            tokenizer: TokenizeConfig::default(),
            parser: ParserYamlConfig::default(),
            calculator: CalculatorYamlConfig::default(),
        }
    }
}

/// Which dependency parser backs the parsed representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserBackend {
    /// No parser; metrics needing a parse fail.
    #[default]
    None,
    /// UDPipe subprocess with a Russian model.
    Udpipe,
    /// Deterministic chain trees, no model needed.
    Stub,
}

/// Parser section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParserYamlConfig {
    #[serde(default)]
    pub backend: ParserBackend,

    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    #[serde(default)]
    pub extra_args: Vec<String>,

    /// Honor `RR_UDPIPE_BIN` / `RR_UDPIPE_MODEL`.
    #[serde(default = "true_value")]
    pub env_overrides: bool,
}

impl ParserYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.backend != ParserBackend::Udpipe {
            return Ok(());
        }
        if self.binary.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "parser.binary must not be empty for the udpipe backend".into(),
            ));
        }
        if self.model_path.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "parser.model_path must not be empty for the udpipe backend".into(),
            ));
        }
        Ok(())
    }

    /// UDPipe settings for this section, env overrides applied when enabled.
    pub fn udpipe_config(&self) -> UdpipeConfig {
        let cfg = UdpipeConfig {
            binary: self.binary.clone(),
            model_path: self.model_path.clone(),
            extra_args: self.extra_args.clone(),
        };
        if self.env_overrides {
            cfg.with_env_overrides()
        } else {
            cfg
        }
    }
}

impl Default for ParserYamlConfig {
    fn default() -> Self {
        Self {
            backend: ParserBackend::None,
            binary: default_binary(),
            model_path: default_model_path(),
            extra_args: Vec::new(),
            env_overrides: true,
        }
    }
}

/// Calculator section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalculatorYamlConfig {
    #[serde(default)]
    pub catalog: Catalog,

    /// Metric keys to keep; absent means the whole catalog. Keys outside the
    /// catalog are dropped when the calculator is built.
    #[serde(default)]
    pub metrics: Option<Vec<String>>,

    #[serde(default)]
    pub use_parallel: bool,
}

impl CalculatorYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(metrics) = &self.metrics {
            if metrics.is_empty() {
                return Err(ConfigLoadError::Validation(
                    "calculator.metrics must list at least one key when present".into(),
                ));
            }
        }
        Ok(())
    }
}

fn default_binary() -> PathBuf {
    UdpipeConfig::default().binary
}
fn default_model_path() -> PathBuf {
    UdpipeConfig::default().model_path
}
fn true_value() -> bool {
    true
}
