//! Literal mapping char filter implementation.

use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};

use super::{CharFilter, Transformation};
use crate::error::{Result, YariError};

/// A char filter that replaces literal strings according to a mapping table.
///
/// Matching is leftmost-longest, so `"abc" -> "x"` wins over `"ab" -> "y"`
/// when both apply at the same start.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use yari::analysis::char_filter::{CharFilter, MappingCharFilter};
///
/// let mut mapping = HashMap::new();
/// mapping.insert("ph".to_string(), "f".to_string());
///
/// let filter = MappingCharFilter::new(mapping).unwrap();
/// let (output, _) = filter.filter("phone");
/// assert_eq!(output, "fone");
/// ```
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Create a new mapping char filter from the given replacement table.
    pub fn new(mapping: HashMap<String, String>) -> Result<Self> {
        let mut keys = Vec::with_capacity(mapping.len());
        let mut replacements = Vec::with_capacity(mapping.len());

        for (k, v) in mapping {
            keys.push(k);
            replacements.push(v);
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| YariError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            let replacement = &self.replacements[m.pattern().as_usize()];

            output.push_str(&input[last_match_end..m.start()]);

            let new_start = output.len();
            output.push_str(replacement);
            let new_end = output.len();

            transformations.push(Transformation::new(m.start(), m.end(), new_start, new_end));

            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_char_filter() {
        let mut mapping = HashMap::new();
        mapping.insert("ph".to_string(), "f".to_string());
        mapping.insert("qu".to_string(), "k".to_string());

        let filter = MappingCharFilter::new(mapping).unwrap();
        let (output, trans) = filter.filter("phone queue");

        assert_eq!(output, "fone keue");
        assert_eq!(trans.len(), 2);

        assert_eq!(trans[0], Transformation::new(0, 2, 0, 1));
        assert_eq!(trans[1], Transformation::new(6, 8, 5, 6));
    }

    #[test]
    fn test_mapping_expansion() {
        let mut mapping = HashMap::new();
        mapping.insert("a".to_string(), "aaa".to_string());
        let filter = MappingCharFilter::new(mapping).unwrap();

        let (output, trans) = filter.filter("bab");
        assert_eq!(output, "baaab");
        assert_eq!(trans, vec![Transformation::new(1, 2, 1, 4)]);
    }

    #[test]
    fn test_mapping_deletion() {
        let mut mapping = HashMap::new();
        mapping.insert("foo".to_string(), "".to_string());
        let filter = MappingCharFilter::new(mapping).unwrap();

        let (output, trans) = filter.filter("afoob");
        assert_eq!(output, "ab");
        assert_eq!(trans, vec![Transformation::new(1, 4, 1, 1)]);
    }

    #[test]
    fn test_mapping_longest_match() {
        let mut mapping = HashMap::new();
        mapping.insert("ab".to_string(), "1".to_string());
        mapping.insert("abc".to_string(), "2".to_string());
        let filter = MappingCharFilter::new(mapping).unwrap();

        let (output, trans) = filter.filter("abc");
        assert_eq!(output, "2");
        assert_eq!(trans, vec![Transformation::new(0, 3, 0, 1)]);
    }

    #[test]
    fn test_filter_name() {
        let filter = MappingCharFilter::new(HashMap::new()).unwrap();
        assert_eq!(filter.name(), "mapping");
    }
}
