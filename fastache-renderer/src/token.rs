//! The compiled token tree.
//!
//! Produced once by [`crate::compiler::compile`], then only read. Nothing in
//! here is mutated during a render, so a tree can be shared across threads.

use crate::ident::Identifier;

/// One compiled template token, tagged with the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub line: usize,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Literal text, written verbatim.
    Text(String),
    /// `{{ name }}`
    Variable(Identifier),
    /// `{{#name}}`, `{{^name}}` or `{{|}}` with its body.
    Section(Section),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub body: Vec<Token>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionKind {
    /// Iterate over a sequence, or render once when truthy.
    Normal(Identifier),
    /// Render once when missing or falsy.
    Inverted(Identifier),
    /// Render unless the enclosing iteration is on its last element.
    Separator,
}

impl Token {
    pub fn text(line: usize, text: impl Into<String>) -> Self {
        Token {
            line,
            kind: TokenKind::Text(text.into()),
        }
    }

    pub fn variable(line: usize, identifier: Identifier) -> Self {
        Token {
            line,
            kind: TokenKind::Variable(identifier),
        }
    }

    pub fn section(line: usize, kind: SectionKind, body: Vec<Token>) -> Self {
        Token {
            line,
            kind: TokenKind::Section(Section { kind, body }),
        }
    }
}
