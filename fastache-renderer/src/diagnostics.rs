//! Diagnostics: warnings and errors reported with template/line context.
//!
//! Reporting never alters control flow. Unresolved variables during a
//! render and syntax errors during compilation both flow through the
//! [`Diagnostics`] trait.

use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Template name (usually its path).
    pub template: String,
    /// 1-based line, or 0 when no line applies.
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(template: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            template: template.into(),
            line,
            message: message.into(),
        }
    }

    pub fn error(template: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            template: template.into(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{}:{}: {}: {}", self.template, self.line, self.severity, self.message)
        } else {
            write!(f, "{}: {}: {}", self.template, self.severity, self.message)
        }
    }
}

/// Receiver for diagnostics.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects every diagnostic in order.
impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`.
///
/// `destination` names the output being generated, if any, and is attached
/// as a field on every event.
#[derive(Debug, Clone, Default)]
pub struct LogDiagnostics {
    destination: Option<String>,
    reported: usize,
}

impl LogDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_destination(destination: impl Into<String>) -> Self {
        LogDiagnostics {
            destination: Some(destination.into()),
            reported: 0,
        }
    }

    /// Number of diagnostics forwarded so far.
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        let destination = self.destination.as_deref().unwrap_or("-");
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(
                template = %diagnostic.template,
                line = diagnostic.line,
                destination,
                "{}",
                diagnostic.message
            ),
            Severity::Error => tracing::error!(
                template = %diagnostic.template,
                line = diagnostic.line,
                destination,
                "{}",
                diagnostic.message
            ),
        }
    }
}
