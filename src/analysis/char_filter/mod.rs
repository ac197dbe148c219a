//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text string before it reaches the tokenizer.
//! Each filter returns the rewritten text together with a list of
//! [`Transformation`]s so the pipeline can map token offsets back to the
//! original input (required for highlighting).
//!
//! # Available Filters
//!
//! - [`html_strip::HtmlStripCharFilter`] - Strips markup tags and decodes entities
//! - [`mapping::MappingCharFilter`] - Literal string replacement
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
///
/// Implementations must never fail on malformed input; unrecognized spans
/// are passed through unchanged.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text and a vector of `Transformation`s
    /// describing the changes made, ordered by position.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod html_strip;
pub mod mapping;
pub mod pattern_replace;

pub use html_strip::HtmlStripCharFilter;
pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
