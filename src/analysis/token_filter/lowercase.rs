//! Lowercase filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that converts token text to lowercase.
///
/// Offsets and position attributes are left unchanged; tokens already
/// marked as stopped are passed through untouched. Apply this before any
/// filter that compares token text (stop words, synonyms) so comparisons
/// see normalized case.
///
/// # Examples
///
/// ```
/// use yari::analysis::token::Token;
/// use yari::analysis::token_filter::{LowercaseFilter, TokenFilter};
///
/// let filter = LowercaseFilter::new();
/// let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result[0].text, "hello");
/// assert_eq!(result[1].text, "world");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    token.with_text(token.text.to_lowercase())
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::new("Test", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "Test"); // Stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_preserves_offsets_and_positions() {
        let filter = LowercaseFilter::new();
        let token = Token::with_offsets("BLOG", 3, 10, 14).with_position_increment(2);

        let result: Vec<Token> = filter
            .filter(Box::new(vec![token].into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "blog");
        assert_eq!(result[0].position, 3);
        assert_eq!(result[0].start_offset, 10);
        assert_eq!(result[0].end_offset, 14);
        assert_eq!(result[0].position_increment, 2);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
