//! Stop filter implementation.
//!
//! Removes common words (stop words) that typically don't contribute to
//! search relevance. Ships a default English list; custom sets, a
//! case-sensitivity flag, and two position policies are supported.
//!
//! # Examples
//!
//! ```
//! use yari::analysis::token::Token;
//! use yari::analysis::token_filter::{StopFilter, TokenFilter};
//!
//! let filter = StopFilter::new(); // default English stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// # Position policy
///
/// When a stop word is removed, its position increment is added onto the
/// next surviving token by default, so phrase queries keep their original
/// word distances ("a blog post" leaves "blog" with increment 2). Call
/// [`preserve_position_increments(false)`](Self::preserve_position_increments)
/// to close the gaps silently instead.
///
/// # Case sensitivity
///
/// Membership checks are exact by default (run a
/// [`LowercaseFilter`](super::LowercaseFilter) upstream for the usual
/// case-insensitive behavior). With
/// [`case_sensitive(false)`](Self::case_sensitive) the candidate text is
/// case-folded before the lookup; the stop-word set itself should then be
/// lowercase.
///
/// # Examples
///
/// ```
/// use yari::analysis::token::Token;
/// use yari::analysis::token_filter::{StopFilter, TokenFilter};
///
/// let filter = StopFilter::from_words(vec!["the"]).case_sensitive(false);
/// let tokens = vec![Token::new("The", 0), Token::new("Quick", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "Quick");
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether membership checks are case-sensitive
    case_sensitive: bool,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
    /// Whether removed tokens add their increment to the next surviving token
    preserve_position_increments: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with a custom stop-word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            case_sensitive: true,
            remove_stopped: true,
            preserve_position_increments: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use yari::analysis::token_filter::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether membership checks are case-sensitive (default: `true`).
    ///
    /// When `false`, token text is lowercased before the lookup.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set whether to remove stopped tokens entirely (default) or just mark
    /// them as stopped and keep them in the stream.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Set whether removed stop words add their position increment to the
    /// next surviving token (default: `true`).
    pub fn preserve_position_increments(mut self, preserve: bool) -> Self {
        self.preserve_position_increments = preserve;
        self
    }

    /// Check if a word is a stop word under the configured case policy.
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stop_words.contains(word)
        } else {
            self.stop_words.contains(&word.to_lowercase())
        }
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut filtered_tokens = Vec::new();
        // Increment carried over from removed tokens.
        let mut pending_increment = 0;

        for token in tokens {
            if !token.is_stopped() && self.is_stop_word(&token.text) {
                if self.remove_stopped {
                    if self.preserve_position_increments {
                        pending_increment += token.position_increment;
                    }
                } else {
                    filtered_tokens.push(token.stop());
                }
                continue;
            }

            let mut token = token;
            if pending_increment > 0 && token.position_increment > 0 {
                token.position_increment += pending_increment;
                pending_increment = 0;
            }
            filtered_tokens.push(token);
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
