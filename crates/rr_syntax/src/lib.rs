//! Dependency-parsed representation of Russian text.
//!
//! Holds the data model the syntactic metrics read (sentences of tokens with
//! a head index and a relation label), a CoNLL-U decoder, and the
//! [`DependencyParser`] seam with its backends:
//!
//! - [`UdpipeParser`] runs the UDPipe binary with a Russian model
//! - [`NoParser`] always reports the parser as unavailable
//! - `StubParser` (feature `stub`) builds deterministic chain trees
//!
//! ```
//! use rr_syntax::decode_conllu;
//!
//! let doc = decode_conllu("1\tДа\tда\tPART\t_\t_\t0\troot\t_\t_\n").unwrap();
//! assert_eq!(doc.token_count(), 1);
//! ```

mod conllu;
mod document;
mod error;
mod parser;
#[cfg(feature = "stub")]
mod stub;
mod udpipe;

pub use crate::conllu::decode_conllu;
pub use crate::document::{ParsedDocument, ParsedSentence, ParsedToken};
pub use crate::error::ParseError;
pub use crate::parser::{DependencyParser, NoParser};
#[cfg(feature = "stub")]
pub use crate::stub::StubParser;
pub use crate::udpipe::{UdpipeConfig, UdpipeParser, BINARY_ENV, MODEL_ENV};
