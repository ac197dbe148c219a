//! Pattern replace char filter implementation.

use regex::Regex;

use super::{CharFilter, Transformation};
use crate::error::{Result, YariError};

/// A char filter that replaces spans matching a regex pattern.
///
/// # Examples
///
/// ```
/// use yari::analysis::char_filter::{CharFilter, PatternReplaceCharFilter};
///
/// let filter = PatternReplaceCharFilter::new(r"-", "").unwrap();
/// let (output, _) = filter.filter("123-456");
/// assert_eq!(output, "123456");
/// ```
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    ///
    /// Fails if `pattern` is not a valid regex.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| YariError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.pattern.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);

            let new_start = output.len();
            output.push_str(&self.replacement);
            let new_end = output.len();

            // Same-length substitutions need no offset correction.
            if m.end() - m.start() != new_end - new_start {
                transformations.push(Transformation::new(m.start(), m.end(), new_start, new_end));
            }

            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
