//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync`. Implementations must allocate all
/// per-call state inside `analyze`, so one analyzer instance can serve
/// concurrent calls with no additional synchronization.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// Runs the complete pipeline: char filters, tokenization, and all
    /// configured token filters. Never mutates the pipeline configuration;
    /// repeated calls on the same text yield identical output.
    ///
    /// # Examples
    ///
    /// ```
    /// use yari::analysis::analyzer::{Analyzer, StandardAnalyzer};
    ///
    /// let analyzer = StandardAnalyzer::new();
    /// let tokens: Vec<_> = analyzer.analyze("The quick brown fox").unwrap().collect();
    ///
    /// // "The" is removed as a stop word, others are lowercased
    /// assert_eq!(tokens.len(), 3);
    /// assert_eq!(tokens[0].text, "quick");
    /// ```
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
