//! Text analysis module for Yari.
//!
//! This module provides the core text analysis functionality: char filters,
//! tokenization, token filtering, synonym graph expansion, and the analyzer
//! pipelines that tie them together.

pub mod analyzer;
pub mod char_filter;
pub mod config;
pub mod registry;
pub mod synonym;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use config::{AnalyzerConfig, StageSpec};
pub use registry::AnalyzerRegistry;
pub use token::{IntoTokenStream, Token, TokenStream};
