//! Line-oriented synonym rule syntax.
//!
//! This is a swappable front-end: it only produces [`SynonymRule`]s, and the
//! filter never sees the text form. The syntax follows the common
//! search-engine rule files:
//!
//! ```text
//! # comments and blank lines are ignored
//! blog post => blogpost        # explicit rule
//! i-pod, i pod => ipod         # several inputs, one output
//! sea biscuit => seabiscuit, sea biscit
//! small, little, tiny          # equivalence group: later phrases
//!                              # contract onto the first
//! ```
//!
//! Explicit rules produce one [`SynonymRule`] per (input, output) pair, in
//! declaration order. Equivalence groups contract each later phrase onto the
//! first one.

use std::path::Path;

use crate::error::{Result, YariError};

use super::SynonymRule;

/// Parse synonym rules from rule-file text.
///
/// # Examples
///
/// ```
/// use yari::analysis::synonym::parser;
///
/// let rules = parser::parse_str("blog post => blogpost").unwrap();
/// assert_eq!(rules.len(), 1);
/// assert_eq!(rules[0].input, vec!["blog", "post"]);
/// assert_eq!(rules[0].output, vec!["blogpost"]);
/// ```
pub fn parse_str(text: &str) -> Result<Vec<SynonymRule>> {
    let mut rules = Vec::new();

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        parse_line(line, line_no + 1, &mut rules)?;
    }

    Ok(rules)
}

/// Parse synonym rules from a file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<SynonymRule>> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        YariError::config(format!(
            "failed to read synonym rule file '{}': {}",
            path.as_ref().display(),
            e
        ))
    })?;
    parse_str(&content)
}

fn parse_line(line: &str, line_no: usize, rules: &mut Vec<SynonymRule>) -> Result<()> {
    if let Some((lhs, rhs)) = line.split_once("=>") {
        let inputs = split_phrases(lhs, line_no)?;
        let outputs = split_phrases(rhs, line_no)?;

        for input in &inputs {
            for output in &outputs {
                rules.push(SynonymRule::from_phrases(input, output));
            }
        }
        return Ok(());
    }

    // Equivalence group: contract each later phrase onto the first.
    let phrases = split_phrases(line, line_no)?;
    if phrases.len() < 2 {
        return Err(YariError::parse(format!(
            "line {line_no}: a rule needs '=>' or at least two comma-separated phrases"
        )));
    }
    for phrase in &phrases[1..] {
        rules.push(SynonymRule::from_phrases(phrase, &phrases[0]));
    }
    Ok(())
}

fn split_phrases(side: &str, line_no: usize) -> Result<Vec<String>> {
    let phrases: Vec<String> = side.split(',').map(|p| p.trim().to_string()).collect();

    if phrases.iter().any(|p| p.is_empty()) {
        return Err(YariError::parse(format!(
            "line {line_no}: empty phrase in '{side}'"
        )));
    }
    Ok(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_rule() {
        let rules = parse_str("blog post => blogpost").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].input, vec!["blog", "post"]);
        assert_eq!(rules[0].output, vec!["blogpost"]);
        assert!(!rules[0].bidirectional);
    }

    #[test]
    fn test_multiple_inputs_and_outputs() {
        let rules = parse_str("i-pod, i pod => ipod, i-pod").unwrap();
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[0].input, vec!["i-pod"]);
        assert_eq!(rules[0].output, vec!["ipod"]);
        assert_eq!(rules[3].input, vec!["i", "pod"]);
        assert_eq!(rules[3].output, vec!["i-pod"]);
    }

    #[test]
    fn test_equivalence_group_contracts_to_first() {
        let rules = parse_str("small, little, tiny").unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].input, vec!["little"]);
        assert_eq!(rules[0].output, vec!["small"]);
        assert_eq!(rules[1].input, vec!["tiny"]);
        assert_eq!(rules[1].output, vec!["small"]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let text = "\n# a comment\nblog post => blogpost  # trailing comment\n\n";
        let rules = parse_str(text).unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_errors() {
        // single phrase with no '=>'
        assert!(parse_str("lonely").is_err());
        // empty side
        assert!(parse_str("=> foo").is_err());
        assert!(parse_str("foo =>").is_err());
        // dangling comma
        assert!(parse_str("a, => b").is_err());
    }

    #[test]
    fn test_error_reports_line_number() {
        let err = parse_str("a => b\nbogus").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
