//! Declarative pipeline configuration.
//!
//! An [`AnalyzerConfig`] names the stages of a pipeline; the
//! [`AnalyzerRegistry`](super::registry::AnalyzerRegistry) turns it into a
//! runnable [`PipelineAnalyzer`](super::analyzer::PipelineAnalyzer). Stage
//! params are free-form JSON decoded by the registered factory.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use yari::analysis::config::AnalyzerConfig;
//!
//! let config: AnalyzerConfig = serde_json::from_value(json!({
//!     "char_filters": [{"name": "html_strip"}],
//!     "tokenizer": {"name": "whitespace"},
//!     "token_filters": [
//!         {"name": "lowercase"},
//!         {"name": "stop", "params": {"stopwords": ["a", "an", "on"]}}
//!     ]
//! })).unwrap();
//!
//! assert_eq!(config.tokenizer.name, "whitespace");
//! assert_eq!(config.token_filters.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named pipeline stage with optional parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageSpec {
    /// Registered name of the stage (e.g. `"whitespace"`, `"stop"`)
    pub name: String,
    /// Stage-specific parameters, decoded by the stage's factory
    #[serde(default)]
    pub params: Value,
}

impl StageSpec {
    /// Create a spec with no parameters.
    pub fn new<S: Into<String>>(name: S) -> Self {
        StageSpec {
            name: name.into(),
            params: Value::Null,
        }
    }

    /// Create a spec with parameters.
    pub fn with_params<S: Into<String>>(name: S, params: Value) -> Self {
        StageSpec {
            name: name.into(),
            params,
        }
    }
}

/// Configuration for a complete analysis pipeline: an ordered char-filter
/// chain, one tokenizer, and an ordered token-filter chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Char filters, applied left to right before tokenization
    #[serde(default)]
    pub char_filters: Vec<StageSpec>,
    /// The tokenizer
    pub tokenizer: StageSpec,
    /// Token filters, applied in declared order
    #[serde(default)]
    pub token_filters: Vec<StageSpec>,
}

impl AnalyzerConfig {
    /// Create a config with the given tokenizer and no filters.
    pub fn new(tokenizer: StageSpec) -> Self {
        AnalyzerConfig {
            char_filters: Vec::new(),
            tokenizer,
            token_filters: Vec::new(),
        }
    }

    /// Append a char filter spec.
    pub fn add_char_filter(mut self, spec: StageSpec) -> Self {
        self.char_filters.push(spec);
        self
    }

    /// Append a token filter spec.
    pub fn add_token_filter(mut self, spec: StageSpec) -> Self {
        self.token_filters.push(spec);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_style() {
        let config = AnalyzerConfig::new(StageSpec::new("whitespace"))
            .add_char_filter(StageSpec::new("html_strip"))
            .add_token_filter(StageSpec::with_params(
                "stop",
                json!({"stopwords": ["the"]}),
            ));

        assert_eq!(config.char_filters.len(), 1);
        assert_eq!(config.tokenizer.name, "whitespace");
        assert_eq!(config.token_filters[0].name, "stop");
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: AnalyzerConfig =
            serde_json::from_value(json!({"tokenizer": {"name": "whitespace"}})).unwrap();

        assert!(config.char_filters.is_empty());
        assert!(config.token_filters.is_empty());
        assert!(config.tokenizer.params.is_null());
    }

    #[test]
    fn test_roundtrip() {
        let config = AnalyzerConfig::new(StageSpec::new("unicode_word"));
        let value = serde_json::to_value(&config).unwrap();
        let back: AnalyzerConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back.tokenizer.name, "unicode_word");
    }
}
