//! Template compiler: raw text to token tree.
//!
//! # Tag syntax
//!
//! | Tag                      | Meaning                                    |
//! |--------------------------|--------------------------------------------|
//! | `{{ name.path }}`        | variable                                   |
//! | `{{ . }}`                | the current value                          |
//! | `{{# name }}`…`{{/ name }}` | section: iterate or render when truthy  |
//! | `{{^ name }}`…`{{/ name }}` | inverted: render when missing or falsy  |
//! | `{{|}}`…`{{/|}}`         | separator: render unless on the last item  |
//! | `{{! … }}`               | comment                                    |
//!
//! Whitespace just inside the delimiters is ignored. Every error in the
//! source is collected, not just the first.

use std::fmt;

use crate::ident::Identifier;
use crate::token::{SectionKind, Token, TokenKind};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const SEPARATOR_NAME: &str = "|";

/// A syntax error at a 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Compile template source into a token tree.
pub fn compile(source: &str) -> Result<Vec<Token>, Vec<SyntaxError>> {
    let mut compiler = Compiler::new();
    compiler.run(source);
    compiler.finish()
}

// ---------------------------------------------------------------------------
// Compiler state
// ---------------------------------------------------------------------------

/// A section whose closing tag has not been seen yet.
struct OpenSection {
    /// `None` when the opening tag was invalid; the body is still collected
    /// so the matching close does not cascade into more errors.
    kind: Option<SectionKind>,
    closing_name: String,
    line: usize,
    tokens: Vec<Token>,
}

struct Compiler {
    root: Vec<Token>,
    open: Vec<OpenSection>,
    errors: Vec<SyntaxError>,
}

impl Compiler {
    fn new() -> Self {
        Compiler {
            root: Vec::new(),
            open: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn run(&mut self, source: &str) {
        let mut rest = source;
        let mut line = 1;
        loop {
            let Some(start) = rest.find(OPEN) else {
                self.push_text(rest, line);
                return;
            };
            let (text, after_text) = rest.split_at(start);
            self.push_text(text, line);
            line += count_lines(text);

            let after_open = &after_text[OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                self.error(line, "unterminated tag: missing '}}'");
                return;
            };
            let inner = &after_open[..end];
            self.tag(inner, line);
            line += count_lines(inner);
            rest = &after_open[end + CLOSE.len()..];
        }
    }

    fn finish(mut self) -> Result<Vec<Token>, Vec<SyntaxError>> {
        while let Some(section) = self.open.pop() {
            self.errors.push(SyntaxError {
                line: section.line,
                message: format!("section '{}' is never closed", section.closing_name),
            });
        }
        if self.errors.is_empty() {
            tracing::debug!(tokens = self.root.len(), "template compiled");
            Ok(self.root)
        } else {
            self.errors.sort_by_key(|e| e.line);
            Err(self.errors)
        }
    }

    fn error(&mut self, line: usize, message: impl Into<String>) {
        self.errors.push(SyntaxError {
            line,
            message: message.into(),
        });
    }

    fn current(&mut self) -> &mut Vec<Token> {
        match self.open.last_mut() {
            Some(section) => &mut section.tokens,
            None => &mut self.root,
        }
    }

    fn push_text(&mut self, text: &str, line: usize) {
        if text.is_empty() {
            return;
        }
        let tokens = self.current();
        if let Some(Token {
            kind: TokenKind::Text(prev),
            ..
        }) = tokens.last_mut()
        {
            prev.push_str(text);
            return;
        }
        tokens.push(Token::text(line, text));
    }

    fn tag(&mut self, inner: &str, line: usize) {
        let trimmed = inner.trim();
        let Some(sigil) = trimmed.chars().next() else {
            self.error(line, "empty tag");
            return;
        };
        let name = trimmed[sigil.len_utf8()..].trim();
        match sigil {
            '!' => {}
            '#' => self.open_section(name, line, SectionKind::Normal),
            '^' => self.open_section(name, line, SectionKind::Inverted),
            '|' => {
                if name.is_empty() {
                    self.open.push(OpenSection {
                        kind: Some(SectionKind::Separator),
                        closing_name: SEPARATOR_NAME.to_owned(),
                        line,
                        tokens: Vec::new(),
                    });
                } else {
                    self.error(line, format!("separator section takes no name, found '{name}'"));
                }
            }
            '/' => self.close_section(name, line),
            _ => match Identifier::parse(trimmed) {
                Ok(identifier) => self.current().push(Token::variable(line, identifier)),
                Err(e) => self.error(line, e.to_string()),
            },
        }
    }

    fn open_section(&mut self, name: &str, line: usize, make: fn(Identifier) -> SectionKind) {
        let kind = match Identifier::parse(name) {
            Ok(identifier) => Some(make(identifier)),
            Err(e) => {
                self.error(line, e.to_string());
                None
            }
        };
        self.open.push(OpenSection {
            kind,
            closing_name: name.to_owned(),
            line,
            tokens: Vec::new(),
        });
    }

    fn close_section(&mut self, name: &str, line: usize) {
        let Some(top) = self.open.last() else {
            self.error(line, format!("closing tag '{name}' has no open section"));
            return;
        };
        if top.closing_name != name {
            let message = format!(
                "closing tag '{name}' does not match open section '{}' from line {}",
                top.closing_name, top.line
            );
            self.error(line, message);
            return;
        }
        let Some(section) = self.open.pop() else {
            return;
        };
        if let Some(kind) = section.kind {
            self.current()
                .push(Token::section(section.line, kind, section.tokens));
        }
    }
}

fn count_lines(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count()
}
