//! Synonym rules and the compiled synonym map.
//!
//! A [`SynonymRule`] maps an input phrase (an ordered word sequence) to an
//! output phrase. [`SynonymMap`] compiles a rule set into a first-word index
//! so the graph filter can find the longest matching rule at a stream
//! position in one bucket scan.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, YariError};

/// A single synonym rule: input phrase → output phrase.
///
/// Both phrases must be non-empty word sequences. A `bidirectional` rule
/// also registers the reverse mapping when the map is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymRule {
    /// The input phrase to match, one word per element
    pub input: Vec<String>,
    /// The output phrase to emit, one word per element
    pub output: Vec<String>,
    /// Whether the reverse mapping (output → input) is also registered
    #[serde(default)]
    pub bidirectional: bool,
}

impl SynonymRule {
    /// Create a new one-directional rule.
    pub fn new(input: Vec<String>, output: Vec<String>) -> Self {
        SynonymRule {
            input,
            output,
            bidirectional: false,
        }
    }

    /// Create a rule from whitespace-separated phrases.
    ///
    /// # Examples
    ///
    /// ```
    /// use yari::analysis::synonym::SynonymRule;
    ///
    /// let rule = SynonymRule::from_phrases("blog post", "blogpost");
    /// assert_eq!(rule.input, vec!["blog", "post"]);
    /// assert_eq!(rule.output, vec!["blogpost"]);
    /// ```
    pub fn from_phrases(input: &str, output: &str) -> Self {
        Self::new(
            input.split_whitespace().map(|s| s.to_string()).collect(),
            output.split_whitespace().map(|s| s.to_string()).collect(),
        )
    }

    /// Make this rule bidirectional.
    pub fn bidirectional(mut self) -> Self {
        self.bidirectional = true;
        self
    }
}

/// A compiled rule entry. Bidirectional source rules expand into two
/// entries at map-build time.
#[derive(Clone, Debug)]
struct CompiledRule {
    input: Vec<String>,
    output: Vec<String>,
}

/// A compiled synonym map supporting longest-match-first lookup.
///
/// Conceptually a finite-state transducer over token sequences: at any
/// stream position, [`match_at`](Self::match_at) returns the single rule
/// that applies there, preferring longer input phrases and breaking ties by
/// declaration order.
///
/// # Examples
///
/// ```
/// use yari::analysis::synonym::{SynonymMap, SynonymRule};
///
/// let map = SynonymMap::new(vec![
///     SynonymRule::from_phrases("blog post", "blogpost"),
///     SynonymRule::from_phrases("post", "posting"),
/// ]).unwrap();
///
/// // The two-word rule wins at the overlapping start
/// let (input_len, output) = map.match_at(&["blog", "post", "tips"]).unwrap();
/// assert_eq!(input_len, 2);
/// assert_eq!(output, ["blogpost"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SynonymMap {
    /// First input word → indices into `rules`, ordered by
    /// (input length desc, declaration order asc).
    buckets: AHashMap<String, Vec<usize>>,
    rules: Vec<CompiledRule>,
    /// Longest input phrase across all rules; bounds the lookahead window.
    max_input_len: usize,
}

impl SynonymMap {
    /// Compile a rule set.
    ///
    /// Fails with a configuration error if any rule has an empty input or
    /// output phrase, or a phrase containing an empty word.
    pub fn new(rules: Vec<SynonymRule>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());

        for (idx, rule) in rules.iter().enumerate() {
            Self::validate_phrase(&rule.input, idx, "input")?;
            Self::validate_phrase(&rule.output, idx, "output")?;

            compiled.push(CompiledRule {
                input: rule.input.clone(),
                output: rule.output.clone(),
            });
            if rule.bidirectional {
                compiled.push(CompiledRule {
                    input: rule.output.clone(),
                    output: rule.input.clone(),
                });
            }
        }

        let mut buckets: AHashMap<String, Vec<usize>> = AHashMap::new();
        let mut max_input_len = 0;
        for (idx, rule) in compiled.iter().enumerate() {
            max_input_len = max_input_len.max(rule.input.len());
            buckets.entry(rule.input[0].clone()).or_default().push(idx);
        }

        // Longest input first; stable sort keeps declaration order within a length.
        for indices in buckets.values_mut() {
            indices.sort_by(|&a, &b| compiled[b].input.len().cmp(&compiled[a].input.len()));
        }

        Ok(SynonymMap {
            buckets,
            rules: compiled,
            max_input_len,
        })
    }

    fn validate_phrase(phrase: &[String], rule_idx: usize, side: &str) -> Result<()> {
        if phrase.is_empty() || phrase.iter().any(|w| w.is_empty()) {
            return Err(YariError::config(format!(
                "synonym rule {rule_idx}: {side} phrase must be a non-empty word sequence"
            )));
        }
        Ok(())
    }

    /// Find the rule matching at the start of `texts`.
    ///
    /// Returns the matched input length and the output phrase. `texts` only
    /// needs to cover the lookahead window ([`max_input_len`](Self::max_input_len)
    /// tokens).
    pub fn match_at(&self, texts: &[&str]) -> Option<(usize, &[String])> {
        let first = texts.first()?;
        let candidates = self.buckets.get(*first)?;

        for &idx in candidates {
            let rule = &self.rules[idx];
            if rule.input.len() <= texts.len()
                && rule.input.iter().zip(texts).all(|(word, text)| word == text)
            {
                return Some((rule.input.len(), &rule.output));
            }
        }
        None
    }

    /// Longest input phrase length across all rules.
    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    /// Number of compiled rule entries (bidirectional rules count twice).
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the map has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_rule() {
        let map = SynonymMap::new(vec![SynonymRule::from_phrases("big", "large")]).unwrap();

        let (len, output) = map.match_at(&["big", "cat"]).unwrap();
        assert_eq!(len, 1);
        assert_eq!(output, ["large"]);

        assert!(map.match_at(&["cat"]).is_none());
        assert_eq!(map.max_input_len(), 1);
    }

    #[test]
    fn test_longest_match_wins() {
        let map = SynonymMap::new(vec![
            SynonymRule::from_phrases("post", "posting"),
            SynonymRule::from_phrases("post office", "postoffice"),
        ])
        .unwrap();

        // Prefix rule declared first still loses to the longer rule
        let (len, output) = map.match_at(&["post", "office"]).unwrap();
        assert_eq!(len, 2);
        assert_eq!(output, ["postoffice"]);

        // The shorter rule applies when the longer one doesn't match
        let (len, output) = map.match_at(&["post", "card"]).unwrap();
        assert_eq!(len, 1);
        assert_eq!(output, ["posting"]);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let map = SynonymMap::new(vec![
            SynonymRule::from_phrases("us", "united states"),
            SynonymRule::from_phrases("us", "usa"),
        ])
        .unwrap();

        let (_, output) = map.match_at(&["us"]).unwrap();
        assert_eq!(output, ["united", "states"]);
    }

    #[test]
    fn test_bidirectional_registers_reverse() {
        let map = SynonymMap::new(vec![
            SynonymRule::from_phrases("us", "united states").bidirectional(),
        ])
        .unwrap();

        assert_eq!(map.len(), 2);

        let (len, output) = map.match_at(&["united", "states"]).unwrap();
        assert_eq!(len, 2);
        assert_eq!(output, ["us"]);
    }

    #[test]
    fn test_empty_phrase_rejected() {
        let err = SynonymMap::new(vec![SynonymRule::new(vec![], vec!["x".to_string()])]);
        assert!(err.is_err());

        let err = SynonymMap::new(vec![SynonymRule::from_phrases("x", "   ")]);
        assert!(err.is_err());
    }

    #[test]
    fn test_lookahead_shorter_than_rule() {
        let map = SynonymMap::new(vec![SynonymRule::from_phrases("blog post", "blogpost")]).unwrap();

        // Only one token left in the stream: the two-word rule cannot match
        assert!(map.match_at(&["blog"]).is_none());
    }
}
