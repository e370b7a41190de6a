//! Compiled template handle.

use std::path::Path;

use crate::compiler::compile;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::CompileError;
use crate::token::Token;

/// A compiled, immutable template. Compile once, render many times.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    tokens: Vec<Token>,
}

impl Template {
    /// Compile `source`; `name` appears in every diagnostic.
    ///
    /// On failure every syntax error is returned inside
    /// [`CompileError::Syntax`].
    pub fn compile(name: impl Into<String>, source: &str) -> Result<Self, CompileError> {
        let name = name.into();
        match compile(source) {
            Ok(tokens) => Ok(Template { name, tokens }),
            Err(errors) => {
                let errors = errors
                    .into_iter()
                    .map(|e| Diagnostic::error(name.as_str(), e.line, e.message))
                    .collect();
                Err(CompileError::Syntax { name, errors })
            }
        }
    }

    /// Like [`Template::compile`], additionally forwarding each syntax error
    /// to `diagnostics` as it is collected.
    pub fn compile_reporting(
        name: impl Into<String>,
        source: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Self, CompileError> {
        let result = Self::compile(name, source);
        if let Err(CompileError::Syntax { errors, .. }) = &result {
            for error in errors {
                diagnostics.report(error.clone());
            }
        }
        result
    }

    /// Read and compile a template file. The template is named after the path.
    pub fn from_file(path: &Path) -> Result<Self, CompileError> {
        Self::compile(path.display().to_string(), &read_source(path)?)
    }

    /// [`Template::from_file`] with syntax errors forwarded to `diagnostics`.
    pub fn from_file_reporting(
        path: &Path,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Self, CompileError> {
        Self::compile_reporting(path.display().to_string(), &read_source(path)?, diagnostics)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

fn read_source(path: &Path) -> Result<String, CompileError> {
    std::fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })
}
