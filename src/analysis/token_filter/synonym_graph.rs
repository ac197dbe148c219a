//! Synonym graph filter for phrase rewriting with multi-word synonym support.
//!
//! Rewrites runs of tokens that match a synonym rule's input phrase into the
//! rule's output phrase while keeping the position bookkeeping of the token
//! graph intact, so phrase queries line up against either the original or
//! the substituted form downstream.

use crate::analysis::synonym::SynonymMap;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that applies synonym rules to the token stream.
///
/// Matching is greedy: at each stream position the longest matching input
/// phrase wins (ties broken by rule declaration order), and consumed tokens
/// are never re-matched. Tokens that match no rule pass through unchanged.
///
/// For a match consuming `L` input tokens:
///
/// - the first output token takes the first consumed token's position
///   increment and gets `position_length = L`,
/// - every following output token is stacked with `position_increment = 0`
///   and `position_length = 1`,
/// - all output tokens cover the consumed span's offsets.
///
/// Match comparison is exact on token text; run a
/// [`LowercaseFilter`](super::LowercaseFilter) upstream when rules are
/// lowercase.
///
/// # Examples
///
/// ```
/// use yari::analysis::synonym::{SynonymMap, SynonymRule};
/// use yari::analysis::token::Token;
/// use yari::analysis::token_filter::{SynonymGraphFilter, TokenFilter};
///
/// let map = SynonymMap::new(vec![
///     SynonymRule::from_phrases("blog post", "blogpost"),
/// ]).unwrap();
/// let filter = SynonymGraphFilter::new(map);
///
/// let tokens = vec![Token::new("blog", 0), Token::new("post", 1)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "blogpost");
/// assert_eq!(result[0].position_length, 2);
/// ```
pub struct SynonymGraphFilter {
    map: SynonymMap,
}

impl SynonymGraphFilter {
    /// Create a new synonym graph filter from a compiled map.
    pub fn new(map: SynonymMap) -> Self {
        Self { map }
    }

    /// Get a reference to the synonym map.
    pub fn map(&self) -> &SynonymMap {
        &self.map
    }

    /// Build the output tokens for a match of `length` tokens starting at
    /// `start`, substituting `output` words.
    fn build_graph_tokens(
        &self,
        input_tokens: &[Token],
        start: usize,
        length: usize,
        output: &[String],
    ) -> Vec<Token> {
        let first = &input_tokens[start];
        let start_offset = first.start_offset;
        let end_offset = input_tokens[start + length - 1].end_offset;

        output
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let mut token = Token::with_offsets(word, first.position, start_offset, end_offset);
                if i == 0 {
                    token.position_increment = first.position_increment;
                    token.position_length = length;
                } else {
                    token.position_increment = 0;
                    token.position_length = 1;
                }
                token
            })
            .collect()
    }
}

impl TokenFilter for SynonymGraphFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let input_tokens: Vec<Token> = tokens.collect();
        let mut output_tokens = Vec::with_capacity(input_tokens.len());
        let mut i = 0;

        while i < input_tokens.len() {
            // Lookahead window bounded by the longest rule input.
            let window_end = (i + self.map.max_input_len()).min(input_tokens.len());
            let texts: Vec<&str> = input_tokens[i..window_end]
                .iter()
                .map(|t| t.text.as_str())
                .collect();

            if let Some((match_length, output)) = self.map.match_at(&texts) {
                output_tokens.extend(self.build_graph_tokens(
                    &input_tokens,
                    i,
                    match_length,
                    output,
                ));
                i += match_length;
            } else {
                output_tokens.push(input_tokens[i].clone());
                i += 1;
            }
        }

        Ok(Box::new(output_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "synonym_graph"
    }
}
