//! Compiled variable paths.

use std::fmt;

use crate::error::IdentifierError;

/// A compiled variable reference: either the current value (`.`) or a
/// non-empty dotted path of non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// `.`: the innermost scope frame itself.
    Current,
    /// `a.b.c`: the first segment is searched through the scope chain,
    /// the rest are followed strictly through nested mappings.
    Path(Vec<String>),
}

impl Identifier {
    /// Parse the text inside a tag. Surrounding whitespace must already be
    /// trimmed by the caller.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        if text.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if text == "." {
            return Ok(Identifier::Current);
        }
        let mut segments = Vec::new();
        for segment in text.split('.') {
            if segment.is_empty() {
                return Err(IdentifierError::EmptySegment {
                    text: text.to_owned(),
                });
            }
            if let Some(c) = segment
                .chars()
                .find(|c| c.is_whitespace() || is_reserved(*c))
            {
                return Err(IdentifierError::InvalidChar {
                    text: text.to_owned(),
                    found: c,
                });
            }
            segments.push(segment.to_owned());
        }
        Ok(Identifier::Path(segments))
    }

    /// Number of segments; `Current` counts as one.
    pub fn len(&self) -> usize {
        match self {
            Identifier::Current => 1,
            Identifier::Path(segments) => segments.len(),
        }
    }

    /// Always `false`: an identifier has at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn segments(&self) -> &[String] {
        match self {
            Identifier::Current => &[],
            Identifier::Path(segments) => segments,
        }
    }

    /// Dotted form of segments `0..=last`, e.g. `a.b` for `a.b.c` and `last == 1`.
    pub fn display_prefix(&self, last: usize) -> String {
        match self {
            Identifier::Current => ".".to_owned(),
            Identifier::Path(segments) => {
                let end = (last + 1).min(segments.len());
                segments[..end].join(".")
            }
        }
    }
}

/// Braces and tag sigils never appear inside a name.
fn is_reserved(c: char) -> bool {
    matches!(c, '{' | '}' | '#' | '^' | '/' | '!' | '|')
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Current => f.write_str("."),
            Identifier::Path(segments) => f.write_str(&segments.join(".")),
        }
    }
}
