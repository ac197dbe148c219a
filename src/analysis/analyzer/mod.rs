//! Analyzer implementations that combine char filters, tokenizers, and
//! token filters.

mod analyzer;
mod pipeline;
mod standard;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
