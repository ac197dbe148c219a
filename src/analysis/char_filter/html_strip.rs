//! HTML strip char filter implementation.
//!
//! Removes markup tags and comments from the input and decodes common
//! character entities, recording a [`Transformation`] for every change so
//! token offsets can be corrected back to the raw input. Malformed markup
//! (a `<` that never closes, a bare `&`) is passed through unchanged rather
//! than treated as an error.

use super::{CharFilter, Transformation};

/// A char filter that strips HTML/XML markup from text.
///
/// - `<tag>`, `</tag>`, `<!doctype ...>`, `<? ... ?>` spans are removed.
/// - `<!-- comments -->` are removed.
/// - Named entities (`&amp;` `&lt;` `&gt;` `&quot;` `&apos;` `&nbsp;`) and
///   numeric entities (`&#65;`, `&#x41;`) are decoded.
/// - Anything that does not parse as markup is kept verbatim.
///
/// # Examples
///
/// ```
/// use yari::analysis::char_filter::{CharFilter, HtmlStripCharFilter};
///
/// let filter = HtmlStripCharFilter::new();
/// let (output, _) = filter.filter("on <b>Elasticsearch</b>");
/// assert_eq!(output, "on Elasticsearch");
///
/// // Malformed markup is recovered, never an error
/// let (output, _) = filter.filter("1 < 2");
/// assert_eq!(output, "1 < 2");
/// ```
#[derive(Clone, Debug, Default)]
pub struct HtmlStripCharFilter;

impl HtmlStripCharFilter {
    /// Create a new HTML strip char filter.
    pub fn new() -> Self {
        HtmlStripCharFilter
    }

    /// Return the byte offset just past the tag starting at `start`,
    /// or `None` if the span does not parse as a tag.
    fn tag_end(input: &str, start: usize) -> Option<usize> {
        let rest = &input[start..];

        if rest.starts_with("<!--") {
            // Comments must be terminated; otherwise recover by passing through.
            return rest.find("-->").map(|pos| start + pos + 3);
        }

        // A tag opener must be followed by '/', '!', '?', or a letter.
        let mut chars = rest.chars();
        chars.next(); // consume '<'
        match chars.next() {
            Some(c) if c == '/' || c == '!' || c == '?' || c.is_ascii_alphabetic() => {}
            _ => return None,
        }

        rest.find('>').map(|pos| start + pos + 1)
    }

    /// Decode the entity starting at `start`, returning the byte offset just
    /// past the `;` and the decoded character.
    fn entity_at(input: &str, start: usize) -> Option<(usize, char)> {
        const MAX_ENTITY_LEN: usize = 12;

        let rest = &input[start..];
        // Byte scan, so the window cap cannot split a multibyte character.
        let window = &rest.as_bytes()[..rest.len().min(MAX_ENTITY_LEN)];
        let semi = window.iter().position(|&b| b == b';')?;
        let body = &rest[1..semi];
        let end = start + semi + 1;

        let decoded = match body {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            _ => {
                let code = body.strip_prefix('#')?;
                let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                    Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                    None => code.parse::<u32>().ok()?,
                };
                char::from_u32(value)?
            }
        };

        Some((end, decoded))
    }
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let bytes = input.as_bytes();
        let mut last = 0;
        let mut i = 0;

        // '<' and '&' are ASCII, so scanning bytes never splits a UTF-8
        // sequence; everything between markers is copied verbatim.
        while i < bytes.len() {
            match bytes[i] {
                b'<' => {
                    if let Some(end) = Self::tag_end(input, i) {
                        output.push_str(&input[last..i]);
                        let new_pos = output.len();
                        transformations.push(Transformation::new(i, end, new_pos, new_pos));
                        i = end;
                        last = end;
                    } else {
                        i += 1;
                    }
                }
                b'&' => {
                    if let Some((end, decoded)) = Self::entity_at(input, i) {
                        output.push_str(&input[last..i]);
                        let new_start = output.len();
                        output.push(decoded);
                        transformations.push(Transformation::new(i, end, new_start, output.len()));
                        i = end;
                        last = end;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }
        output.push_str(&input[last..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}
