//! Stage registry for building analyzers from configuration.
//!
//! Each pipeline stage is a named, registered factory producing a stage
//! instance from its JSON params. [`AnalyzerRegistry::with_defaults`] wires
//! up everything this crate ships; applications can register their own
//! stages alongside.
//!
//! All configuration problems (unknown stage names, malformed params,
//! invalid synonym rules) surface here at build time; the built analyzer
//! never fails on input content.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use yari::analysis::analyzer::Analyzer;
//! use yari::analysis::config::AnalyzerConfig;
//! use yari::analysis::registry::AnalyzerRegistry;
//!
//! let config: AnalyzerConfig = serde_json::from_value(json!({
//!     "tokenizer": {"name": "whitespace"},
//!     "token_filters": [{"name": "lowercase"}]
//! })).unwrap();
//!
//! let registry = AnalyzerRegistry::with_defaults();
//! let analyzer = registry.build(&config).unwrap();
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//! assert_eq!(tokens[0].text, "hello");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use ahash::AHashMap;
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::char_filter::{
    CharFilter, HtmlStripCharFilter, MappingCharFilter, PatternReplaceCharFilter,
};
use crate::analysis::config::AnalyzerConfig;
use crate::analysis::synonym::{SynonymMap, SynonymRule, parser};
use crate::analysis::token_filter::{LowercaseFilter, StopFilter, SynonymGraphFilter, TokenFilter};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer};
use crate::error::{Result, YariError};

/// Factory function building a char filter from its params.
pub type CharFilterFactory = Box<dyn Fn(&Value) -> Result<Arc<dyn CharFilter>> + Send + Sync>;
/// Factory function building a tokenizer from its params.
pub type TokenizerFactory = Box<dyn Fn(&Value) -> Result<Arc<dyn Tokenizer>> + Send + Sync>;
/// Factory function building a token filter from its params.
pub type TokenFilterFactory = Box<dyn Fn(&Value) -> Result<Arc<dyn TokenFilter>> + Send + Sync>;

/// Decode stage params into a concrete param struct.
///
/// Missing params decode as an empty object, so stages with all-optional
/// params accept a bare `{"name": "..."}` spec.
fn decode_params<T: serde::de::DeserializeOwned>(name: &str, params: &Value) -> Result<T> {
    let value = if params.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        params.clone()
    };
    serde_json::from_value(value)
        .map_err(|e| YariError::config(format!("invalid params for '{name}': {e}")))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingParams {
    mappings: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternReplaceParams {
    pattern: String,
    #[serde(default)]
    replacement: String,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StopParams {
    stopwords: Option<Vec<String>>,
    case_sensitive: bool,
    preserve_position_increments: bool,
}

impl Default for StopParams {
    fn default() -> Self {
        StopParams {
            stopwords: None,
            case_sensitive: true,
            preserve_position_increments: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SynonymRuleSpec {
    input: String,
    output: String,
    #[serde(default)]
    bidirectional: bool,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SynonymGraphParams {
    /// Explicit rules
    rules: Vec<SynonymRuleSpec>,
    /// Rule lines in the text syntax (`"a, b => c"`)
    synonyms: Vec<String>,
    /// Path to a rule file in the text syntax
    path: Option<String>,
}

/// Registry mapping stage names to factory functions.
pub struct AnalyzerRegistry {
    char_filters: AHashMap<String, CharFilterFactory>,
    tokenizers: AHashMap<String, TokenizerFactory>,
    token_filters: AHashMap<String, TokenFilterFactory>,
}

impl AnalyzerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        AnalyzerRegistry {
            char_filters: AHashMap::new(),
            tokenizers: AHashMap::new(),
            token_filters: AHashMap::new(),
        }
    }

    /// Create a registry with all built-in stages registered.
    ///
    /// Char filters: `html_strip`, `mapping`, `pattern_replace`.
    /// Tokenizers: `whitespace`, `unicode_word`.
    /// Token filters: `lowercase`, `stop`, `synonym_graph`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register_char_filter(
            "html_strip",
            Box::new(|_| Ok(Arc::new(HtmlStripCharFilter::new()))),
        );
        registry.register_char_filter(
            "mapping",
            Box::new(|params| {
                let p: MappingParams = decode_params("mapping", params)?;
                Ok(Arc::new(MappingCharFilter::new(p.mappings)?))
            }),
        );
        registry.register_char_filter(
            "pattern_replace",
            Box::new(|params| {
                let p: PatternReplaceParams = decode_params("pattern_replace", params)?;
                Ok(Arc::new(PatternReplaceCharFilter::new(
                    &p.pattern,
                    &p.replacement,
                )?))
            }),
        );

        registry.register_tokenizer(
            "whitespace",
            Box::new(|_| Ok(Arc::new(WhitespaceTokenizer::new()))),
        );
        registry.register_tokenizer(
            "unicode_word",
            Box::new(|_| Ok(Arc::new(UnicodeWordTokenizer::new()))),
        );

        registry.register_token_filter(
            "lowercase",
            Box::new(|_| Ok(Arc::new(LowercaseFilter::new()))),
        );
        registry.register_token_filter(
            "stop",
            Box::new(|params| {
                let p: StopParams = decode_params("stop", params)?;
                let filter = match p.stopwords {
                    Some(words) => StopFilter::from_words(words),
                    None => StopFilter::new(),
                };
                Ok(Arc::new(
                    filter
                        .case_sensitive(p.case_sensitive)
                        .preserve_position_increments(p.preserve_position_increments),
                ))
            }),
        );
        registry.register_token_filter(
            "synonym_graph",
            Box::new(|params| {
                let p: SynonymGraphParams = decode_params("synonym_graph", params)?;
                let mut rules: Vec<SynonymRule> = p
                    .rules
                    .iter()
                    .map(|spec| {
                        let rule = SynonymRule::from_phrases(&spec.input, &spec.output);
                        if spec.bidirectional {
                            rule.bidirectional()
                        } else {
                            rule
                        }
                    })
                    .collect();
                if !p.synonyms.is_empty() {
                    rules.extend(parser::parse_str(&p.synonyms.join("\n"))?);
                }
                if let Some(path) = &p.path {
                    rules.extend(parser::parse_file(path)?);
                }
                Ok(Arc::new(SynonymGraphFilter::new(SynonymMap::new(rules)?)))
            }),
        );

        registry
    }

    /// Register a char filter factory under the given name.
    pub fn register_char_filter<S: Into<String>>(&mut self, name: S, factory: CharFilterFactory) {
        self.char_filters.insert(name.into(), factory);
    }

    /// Register a tokenizer factory under the given name.
    pub fn register_tokenizer<S: Into<String>>(&mut self, name: S, factory: TokenizerFactory) {
        self.tokenizers.insert(name.into(), factory);
    }

    /// Register a token filter factory under the given name.
    pub fn register_token_filter<S: Into<String>>(&mut self, name: S, factory: TokenFilterFactory) {
        self.token_filters.insert(name.into(), factory);
    }

    /// Build a pipeline analyzer from a configuration.
    ///
    /// Fails with a configuration error if any spec names an unregistered
    /// stage or carries params its factory rejects.
    pub fn build(&self, config: &AnalyzerConfig) -> Result<PipelineAnalyzer> {
        let tokenizer_factory = self.tokenizers.get(&config.tokenizer.name).ok_or_else(|| {
            YariError::config(format!("unknown tokenizer '{}'", config.tokenizer.name))
        })?;
        let mut analyzer = PipelineAnalyzer::new(tokenizer_factory(&config.tokenizer.params)?);

        for spec in &config.char_filters {
            let factory = self
                .char_filters
                .get(&spec.name)
                .ok_or_else(|| YariError::config(format!("unknown char filter '{}'", spec.name)))?;
            analyzer = analyzer.add_char_filter(factory(&spec.params)?);
        }

        for spec in &config.token_filters {
            let factory = self.token_filters.get(&spec.name).ok_or_else(|| {
                YariError::config(format!("unknown token filter '{}'", spec.name))
            })?;
            analyzer = analyzer.add_filter(factory(&spec.params)?);
        }

        Ok(analyzer)
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::config::StageSpec;
    use crate::analysis::token::Token;
    use serde_json::json;

    #[test]
    fn test_build_from_config() {
        let registry = AnalyzerRegistry::with_defaults();
        let config = AnalyzerConfig::new(StageSpec::new("whitespace"))
            .add_token_filter(StageSpec::new("lowercase"))
            .add_token_filter(StageSpec::with_params(
                "stop",
                json!({"stopwords": ["the"]}),
            ));

        let analyzer = registry.build(&config).unwrap();
        let tokens: Vec<Token> = analyzer.analyze("Hello THE World").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
    }

    #[test]
    fn test_unknown_stage_names() {
        let registry = AnalyzerRegistry::with_defaults();

        let config = AnalyzerConfig::new(StageSpec::new("nope"));
        let err = registry.build(&config).unwrap_err();
        assert!(err.to_string().contains("unknown tokenizer 'nope'"));

        let config = AnalyzerConfig::new(StageSpec::new("whitespace"))
            .add_char_filter(StageSpec::new("nope"));
        assert!(registry.build(&config).is_err());

        let config = AnalyzerConfig::new(StageSpec::new("whitespace"))
            .add_token_filter(StageSpec::new("nope"));
        assert!(registry.build(&config).is_err());
    }

    #[test]
    fn test_invalid_params_fail_at_build_time() {
        let registry = AnalyzerRegistry::with_defaults();

        // pattern_replace requires a pattern
        let config = AnalyzerConfig::new(StageSpec::new("whitespace"))
            .add_char_filter(StageSpec::new("pattern_replace"));
        assert!(registry.build(&config).is_err());

        // unknown param keys are rejected
        let config = AnalyzerConfig::new(StageSpec::new("whitespace"))
            .add_token_filter(StageSpec::with_params("stop", json!({"bogus": true})));
        assert!(registry.build(&config).is_err());
    }

    #[test]
    fn test_empty_synonym_phrase_rejected() {
        let registry = AnalyzerRegistry::with_defaults();
        let config = AnalyzerConfig::new(StageSpec::new("whitespace")).add_token_filter(
            StageSpec::with_params(
                "synonym_graph",
                json!({"rules": [{"input": "", "output": "x"}]}),
            ),
        );

        assert!(registry.build(&config).is_err());
    }

    #[test]
    fn test_synonym_rules_and_text_syntax() {
        let registry = AnalyzerRegistry::with_defaults();
        let config = AnalyzerConfig::new(StageSpec::new("whitespace")).add_token_filter(
            StageSpec::with_params(
                "synonym_graph",
                json!({
                    "rules": [{"input": "us", "output": "united states", "bidirectional": true}],
                    "synonyms": ["blog post => blogpost"]
                }),
            ),
        );

        let analyzer = registry.build(&config).unwrap();
        let tokens: Vec<Token> = analyzer.analyze("blog post").unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "blogpost");

        let tokens: Vec<Token> = analyzer.analyze("united states").unwrap().collect();
        assert_eq!(tokens[0].text, "us");
    }

    #[test]
    fn test_custom_stage_registration() {
        let mut registry = AnalyzerRegistry::with_defaults();
        registry.register_tokenizer(
            "words",
            Box::new(|_| Ok(Arc::new(UnicodeWordTokenizer::new()))),
        );

        let config = AnalyzerConfig::new(StageSpec::new("words"));
        let analyzer = registry.build(&config).unwrap();
        let tokens: Vec<Token> = analyzer.analyze("hello, world!").unwrap().collect();
        assert_eq!(tokens.len(), 2);
    }
}
