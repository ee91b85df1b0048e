//! UDPipe subprocess adapter.
//!
//! Runs `udpipe --tokenize --tag --parse <model>` with the text on stdin and
//! decodes the CoNLL-U it prints. The binary and model are located once, on
//! first use, and reused for the lifetime of the parser handle.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::Instant;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::conllu::decode_conllu;
use crate::document::ParsedDocument;
use crate::error::ParseError;
use crate::parser::DependencyParser;

/// Environment variable overriding [`UdpipeConfig::binary`].
pub const BINARY_ENV: &str = "RR_UDPIPE_BIN";
/// Environment variable overriding [`UdpipeConfig::model_path`].
pub const MODEL_ENV: &str = "RR_UDPIPE_MODEL";

/// Where to find UDPipe and which Russian model to load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UdpipeConfig {
    /// Executable name (looked up on `PATH`) or path.
    pub binary: PathBuf,
    /// Path to a `.udpipe` model file. Installing it is the caller's job.
    pub model_path: PathBuf,
    /// Extra flags inserted before the model path (e.g. `--tokenizer=presegmented`).
    pub extra_args: Vec<String>,
}

impl Default for UdpipeConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("udpipe"),
            model_path: PathBuf::from("./models/russian-syntagrus-ud-2.5-191206.udpipe"),
            extra_args: Vec::new(),
        }
    }
}

impl UdpipeConfig {
    /// Applies `RR_UDPIPE_BIN` / `RR_UDPIPE_MODEL` when they are set.
    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(env::var_os(BINARY_ENV), env::var_os(MODEL_ENV))
    }

    fn apply_overrides(mut self, binary: Option<OsString>, model: Option<OsString>) -> Self {
        if let Some(binary) = binary.filter(|v| !v.is_empty()) {
            self.binary = PathBuf::from(binary);
        }
        if let Some(model) = model.filter(|v| !v.is_empty()) {
            self.model_path = PathBuf::from(model);
        }
        self
    }
}

#[derive(Debug)]
struct ResolvedAssets {
    binary: PathBuf,
    model: PathBuf,
}

/// Dependency parser backed by the UDPipe command-line tool.
#[derive(Debug)]
pub struct UdpipeParser {
    cfg: UdpipeConfig,
    assets: OnceCell<ResolvedAssets>,
}

impl UdpipeParser {
    pub fn new(cfg: UdpipeConfig) -> Self {
        Self {
            cfg,
            assets: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &UdpipeConfig {
        &self.cfg
    }

    /// Resolves the binary and model now instead of on the first parse.
    pub fn warm_up(&self) -> Result<(), ParseError> {
        self.assets().map(|_| ())
    }

    /// Whether the one-time resolution already succeeded.
    pub fn is_initialized(&self) -> bool {
        self.assets.get().is_some()
    }

    fn assets(&self) -> Result<&ResolvedAssets, ParseError> {
        self.assets.get_or_try_init(|| resolve_assets(&self.cfg))
    }

    fn command(&self, assets: &ResolvedAssets) -> Command {
        let mut cmd = Command::new(&assets.binary);
        cmd.args(["--tokenize", "--tag", "--parse"])
            .args(&self.cfg.extra_args)
            .arg(&assets.model);
        cmd
    }

    fn run(&self, assets: &ResolvedAssets, text: &str) -> Result<Output, ParseError> {
        let mut child = self
            .command(assets)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("parser stdin was not captured"))?;

        // Feed stdin from a second thread so a large output cannot deadlock the pipes.
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(text.as_bytes()));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("parser stdin writer panicked")));
            (written, output)
        });

        let output = output?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = %output.status, stderr = %stderr, "udpipe_failure");
            return Err(ParseError::Process {
                status: output.status.to_string(),
                stderr,
            });
        }
        written?;
        Ok(output)
    }
}

impl DependencyParser for UdpipeParser {
    fn parse(&self, text: &str) -> Result<ParsedDocument, ParseError> {
        let start = Instant::now();
        let assets = self.assets()?;
        let output = self.run(assets, text)?;
        let conllu =
            String::from_utf8(output.stdout).map_err(|e| ParseError::InvalidOutput(e.to_string()))?;
        let doc = decode_conllu(&conllu)?;
        debug!(
            sentences = doc.sentence_count(),
            tokens = doc.token_count(),
            elapsed_micros = start.elapsed().as_micros(),
            "udpipe_parse"
        );
        Ok(doc)
    }

    fn name(&self) -> &str {
        "udpipe"
    }
}

fn resolve_assets(cfg: &UdpipeConfig) -> Result<ResolvedAssets, ParseError> {
    if !cfg.model_path.is_file() {
        return Err(ParseError::ModelNotFound(
            cfg.model_path.display().to_string(),
        ));
    }
    let binary = locate_binary(&cfg.binary)
        .ok_or_else(|| ParseError::BinaryNotFound(cfg.binary.display().to_string()))?;

    debug!(
        binary = %binary.display(),
        model = %cfg.model_path.display(),
        "udpipe_resolved"
    );
    Ok(ResolvedAssets {
        binary,
        model: cfg.model_path.clone(),
    })
}

/// Bare names are searched on `PATH`; anything with a directory part is taken as-is.
fn locate_binary(binary: &Path) -> Option<PathBuf> {
    if binary.is_absolute() || binary.components().count() > 1 {
        return binary.is_file().then(|| binary.to_path_buf());
    }
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}
