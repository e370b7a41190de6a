//! Render engine: walks a token tree against a scope chain.
//!
//! # Section semantics
//!
//! | Kind      | Value                  | Effect                                          |
//! |-----------|------------------------|-------------------------------------------------|
//! | normal    | missing / `false`      | nothing                                         |
//! | normal    | sequence               | body once per element, element pushed as frame  |
//! | normal    | anything else truthy   | body once, the value pushed as frame            |
//! | inverted  | missing / `false`      | body once in the current scope                  |
//! | inverted  | truthy                 | nothing                                         |
//! | separator | any                    | body once unless on the last element of the enclosing iteration |
//!
//! Lookup failures never abort a render; they become diagnostics. Only sink
//! failures are fatal.

use fastache_core::Value;

use crate::config::{DiagnosticPolicy, RenderOptions};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::RenderError;
use crate::ident::Identifier;
use crate::resolve::resolve;
use crate::scope::{FrameOrigin, ScopeChain};
use crate::sink::Sink;
use crate::template::Template;
use crate::token::{Section, SectionKind, Token, TokenKind};

/// Outcome of a successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    /// Number of diagnostics reported during the render.
    pub warnings: usize,
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders compiled templates. Cheap to share; holds only options.
///
/// One `Renderer` and one [`Template`] may serve any number of concurrent
/// renders, each with its own data, sink and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Renderer { options }
    }

    /// Render `template` with `data` as the root scope.
    pub fn render(
        &self,
        template: &Template,
        data: &Value,
        sink: &mut dyn Sink,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<RenderSummary, RenderError> {
        self.render_tokens(template.name(), template.tokens(), data, sink, diagnostics)
    }

    /// Render a bare token sequence; `name` is used in diagnostics.
    pub fn render_tokens(
        &self,
        name: &str,
        tokens: &[Token],
        data: &Value,
        sink: &mut dyn Sink,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<RenderSummary, RenderError> {
        tracing::debug!(template = name, "render started");
        let mut ctx = RenderContext {
            options: &self.options,
            template: name,
            scopes: ScopeChain::new(data),
            last_element: false,
            warnings: 0,
            sink,
            diagnostics,
        };
        ctx.render_block(tokens)?;
        debug_assert_eq!(ctx.scopes.depth(), 1, "only the root frame may remain");
        tracing::debug!(template = name, warnings = ctx.warnings, "render finished");
        Ok(RenderSummary {
            warnings: ctx.warnings,
        })
    }

    /// Render into a `String`.
    pub fn render_to_string(
        &self,
        template: &Template,
        data: &Value,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<String, RenderError> {
        let mut buf: Vec<u8> = Vec::new();
        self.render(template, data, &mut buf, diagnostics)?;
        Ok(String::from_utf8(buf)?)
    }
}

// ---------------------------------------------------------------------------
// Render context
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupSite {
    Variable,
    Section,
}

/// Per-render mutable state. Never shared between renders.
struct RenderContext<'a, 'v> {
    options: &'a RenderOptions,
    template: &'a str,
    scopes: ScopeChain<'v>,
    /// Set while rendering the last element of the innermost iteration.
    last_element: bool,
    warnings: usize,
    sink: &'a mut dyn Sink,
    diagnostics: &'a mut dyn Diagnostics,
}

impl<'a, 'v> RenderContext<'a, 'v> {
    fn render_block(&mut self, tokens: &[Token]) -> Result<(), RenderError> {
        let depth = self.scopes.depth();
        for token in tokens {
            match &token.kind {
                TokenKind::Text(text) => self.write(text.as_bytes())?,
                TokenKind::Variable(identifier) => self.render_variable(identifier, token.line)?,
                TokenKind::Section(section) => self.render_section(section, token.line)?,
            }
        }
        debug_assert_eq!(depth, self.scopes.depth(), "unbalanced scope push/pop");
        Ok(())
    }

    fn render_variable(&mut self, identifier: &Identifier, line: usize) -> Result<(), RenderError> {
        match self.lookup(identifier, line, LookupSite::Variable) {
            Some(value) => self.write_value(value),
            None => Ok(()),
        }
    }

    fn render_section(&mut self, section: &Section, line: usize) -> Result<(), RenderError> {
        match &section.kind {
            SectionKind::Separator => {
                if self.last_element {
                    Ok(())
                } else {
                    self.render_block(&section.body)
                }
            }
            SectionKind::Inverted(identifier) => {
                let truthy = self
                    .lookup(identifier, line, LookupSite::Section)
                    .is_some_and(Value::is_truthy);
                if truthy {
                    Ok(())
                } else {
                    self.render_block(&section.body)
                }
            }
            SectionKind::Normal(identifier) => {
                let Some(value) = self.lookup(identifier, line, LookupSite::Section) else {
                    return Ok(());
                };
                if !value.is_truthy() {
                    return Ok(());
                }
                match value {
                    Value::Sequence(items) => self.render_items(items, &section.body),
                    _ => {
                        self.scopes.push(value, FrameOrigin::Section);
                        self.render_block(&section.body)?;
                        self.scopes.pop();
                        Ok(())
                    }
                }
            }
        }
    }

    /// Render `body` once per element. The last-element flag is false for
    /// every element but the last and restored afterwards.
    fn render_items(&mut self, items: &'v [Value], body: &[Token]) -> Result<(), RenderError> {
        let Some((last, init)) = items.split_last() else {
            return Ok(());
        };
        let saved = self.last_element;

        self.last_element = false;
        for item in init {
            self.render_element(item, body)?;
        }
        self.last_element = true;
        self.render_element(last, body)?;

        self.last_element = saved;
        Ok(())
    }

    fn render_element(&mut self, item: &'v Value, body: &[Token]) -> Result<(), RenderError> {
        self.scopes.push(item, FrameOrigin::Element);
        self.render_block(body)?;
        self.scopes.pop();
        Ok(())
    }

    /// Resolve `identifier` and report failures according to the
    /// diagnostic policy.
    fn lookup(&mut self, identifier: &Identifier, line: usize, site: LookupSite) -> Option<&'v Value> {
        let miss = match resolve(identifier, &self.scopes) {
            Ok(value) => return Some(value),
            Err(miss) => miss,
        };
        let intermediate = miss.is_intermediate(identifier);
        let report_partial = intermediate
            && match site {
                LookupSite::Section => true,
                LookupSite::Variable => self.options.diagnostics == DiagnosticPolicy::Detailed,
            };
        if report_partial {
            self.warn_not_found(line, identifier.display_prefix(miss.failed_at));
        }
        if site == LookupSite::Variable {
            self.warn_not_found(line, identifier.to_string());
        }
        None
    }

    fn warn_not_found(&mut self, line: usize, path: String) {
        self.warnings += 1;
        self.diagnostics.report(Diagnostic::warning(
            self.template,
            line,
            format!("variable '{path}' not found"),
        ));
    }

    fn write_value(&mut self, value: &Value) -> Result<(), RenderError> {
        let options = self.options;
        match value {
            Value::String(s) => self.write(s.as_bytes()),
            Value::Integer(_) | Value::Unsigned(_) | Value::Float(_) => {
                self.write(value.to_string().as_bytes())
            }
            Value::Bool(true) => self.write(options.true_literal.as_bytes()),
            Value::Bool(false) => self.write(options.false_literal.as_bytes()),
            other => {
                self.write(options.marker_open.as_bytes())?;
                self.write(other.type_name().as_bytes())?;
                self.write(options.marker_close.as_bytes())
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let written = self.sink.write(bytes)?;
        if written != bytes.len() {
            return Err(RenderError::ShortWrite {
                expected: bytes.len(),
                written,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
