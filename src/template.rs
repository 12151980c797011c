//! Named-placeholder substitution over fixed template strings.
//!
//! Placeholders are written `$name` or `${name}`, where a name is an ASCII
//! identifier. `$$` produces a literal `$`. Replacement text is inserted
//! verbatim: nothing is escaped and nothing inserted is scanned again.

use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while substituting a template
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("No value supplied for placeholder ${0}")]
    MissingKey(String),

    #[error("Invalid placeholder in template: line {line}, col {column}")]
    InvalidPlaceholder { line: usize, column: usize },
}

/// An immutable template string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a>(&'a str);

/// One lexical piece of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    /// `$$`
    Dollar,
    /// `raw` is the placeholder as written, e.g. `${name}`
    Placeholder { name: &'a str, raw: &'a str },
    /// A `$` at byte `offset` that starts no valid placeholder
    Invalid { offset: usize },
}

impl<'a> Template<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self(source)
    }

    pub fn source(&self) -> &'a str {
        self.0
    }

    /// Replace every placeholder with its value.
    ///
    /// Fails on the first placeholder without a value, or on a `$` that does
    /// not start a valid placeholder. Values whose names never appear are
    /// ignored.
    pub fn substitute(&self, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(self.0.len());

        for segment in self.segments() {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Dollar => output.push('$'),
                Segment::Placeholder { name, .. } => match values.get(name) {
                    Some(value) => output.push_str(value),
                    None => return Err(TemplateError::MissingKey(name.to_string())),
                },
                Segment::Invalid { offset } => {
                    let (line, column) = self.position(offset);
                    return Err(TemplateError::InvalidPlaceholder { line, column });
                }
            }
        }

        Ok(output)
    }

    /// Like [`Template::substitute`], but never fails: placeholders without
    /// a value and stray `$` characters are left as written.
    pub fn safe_substitute(&self, values: &HashMap<&str, String>) -> String {
        let mut output = String::with_capacity(self.0.len());

        for segment in self.segments() {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Dollar => output.push('$'),
                Segment::Placeholder { name, raw } => {
                    output.push_str(values.get(name).map(String::as_str).unwrap_or(raw))
                }
                Segment::Invalid { .. } => output.push('$'),
            }
        }

        output
    }

    /// Placeholder names in order of first appearance, without duplicates
    pub fn placeholders(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = Vec::new();
        for segment in self.segments() {
            if let Segment::Placeholder { name, .. } = segment {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    fn segments(&self) -> Segments<'a> {
        Segments { source: self.0, pos: 0 }
    }

    /// 1-based line and column (in characters) of a byte offset
    fn position(&self, offset: usize) -> (usize, usize) {
        let before = &self.0[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

struct Segments<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        let rest = &source[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let Some(dollar) = rest.find('$') else {
            self.pos = source.len();
            return Some(Segment::Text(rest));
        };

        if dollar > 0 {
            self.pos += dollar;
            return Some(Segment::Text(&rest[..dollar]));
        }

        let start = self.pos;
        let after = &rest[1..];

        if after.starts_with('$') {
            self.pos += 2;
            return Some(Segment::Dollar);
        }

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(name) = identifier(braced) {
                if braced[name.len()..].starts_with('}') {
                    // `$` + `{` + name + `}`
                    let len = name.len() + 3;
                    self.pos += len;
                    return Some(Segment::Placeholder {
                        name,
                        raw: &source[start..start + len],
                    });
                }
            }
        } else if let Some(name) = identifier(after) {
            let len = name.len() + 1;
            self.pos += len;
            return Some(Segment::Placeholder {
                name,
                raw: &source[start..start + len],
            });
        }

        self.pos += 1;
        Some(Segment::Invalid { offset: start })
    }
}

/// The longest ASCII identifier (`[_A-Za-z][_A-Za-z0-9]*`) at the start of `s`
fn identifier(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return None,
    }
    let len = bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count();
    Some(&s[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_substitute_plain_and_braced() {
        let template = Template::new("<p>$greeting, ${name}s!</p>");
        let result = template
            .substitute(&values(&[("greeting", "Hello"), ("name", "world")]))
            .unwrap();
        assert_eq!(result, "<p>Hello, worlds!</p>");
    }

    #[test]
    fn test_dollar_escape() {
        let template = Template::new("cost: $$$amount");
        let result = template.substitute(&values(&[("amount", "5")])).unwrap();
        assert_eq!(result, "cost: $5");
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        let template = Template::new("[$a]");
        let result = template.substitute(&values(&[("a", "$b ${c} $$")])).unwrap();
        assert_eq!(result, "[$b ${c} $$]");
    }

    #[test]
    fn test_identifier_stops_at_punctuation() {
        let template = Template::new(".attr(\"width\", $width);");
        let result = template.substitute(&values(&[("width", "100")])).unwrap();
        assert_eq!(result, ".attr(\"width\", 100);");
    }

    #[test]
    fn test_missing_key() {
        let template = Template::new("$present $absent");
        let err = template
            .substitute(&values(&[("present", "x")]))
            .unwrap_err();
        assert_eq!(err, TemplateError::MissingKey("absent".to_string()));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let template = Template::new("$a");
        let result = template
            .substitute(&values(&[("a", "1"), ("unused", "2")]))
            .unwrap();
        assert_eq!(result, "1");
    }

    #[test]
    fn test_invalid_placeholder_position() {
        let template = Template::new("line one\n  cost $5");
        let err = template.substitute(&HashMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::InvalidPlaceholder { line: 2, column: 8 });
    }

    #[test]
    fn test_unterminated_brace_is_invalid() {
        let template = Template::new("${name");
        let err = template.substitute(&values(&[("name", "x")])).unwrap_err();
        assert_eq!(err, TemplateError::InvalidPlaceholder { line: 1, column: 1 });
    }

    #[test]
    fn test_trailing_dollar_is_invalid() {
        let template = Template::new("ends with $");
        assert!(matches!(
            template.substitute(&HashMap::new()),
            Err(TemplateError::InvalidPlaceholder { line: 1, column: 11 })
        ));
    }

    #[test]
    fn test_safe_substitute_leaves_unknowns() {
        let template = Template::new("$known ${unknown} $5 $$");
        let result = template.safe_substitute(&values(&[("known", "ok")]));
        assert_eq!(result, "ok ${unknown} $5 $");
    }

    #[test]
    fn test_placeholders_in_order() {
        let template = Template::new("${b} $a $b $$c");
        assert_eq!(template.placeholders(), vec!["b", "a"]);
    }

    #[test]
    fn test_non_ascii_text_passes_through() {
        let template = Template::new("été $x ü");
        let result = template.substitute(&values(&[("x", "ñ")])).unwrap();
        assert_eq!(result, "été ñ ü");
    }
}
