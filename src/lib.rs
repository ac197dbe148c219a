//! # Yari
//!
//! A composable text analysis pipeline library for Rust.
//!
//! Yari turns raw text into a normalized stream of searchable tokens:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! ## Features
//!
//! - Char filters (HTML stripping, literal mapping, regex replacement)
//!   with offset correction back to the original text
//! - Whitespace and Unicode word-boundary tokenizers
//! - Token filters: lowercase, stop words, synonym graph expansion with
//!   multi-word phrases and correct position increments/lengths
//! - A registry-driven configuration surface for building analyzers from
//!   declarative specs
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use yari::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use yari::analysis::token_filter::{LowercaseFilter, StopFilter};
//! use yari::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello THE world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

pub mod analysis;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
