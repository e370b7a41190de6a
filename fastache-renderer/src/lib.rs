//! # fastache-renderer
//!
//! Logic-less template engine: compiles `{{ }}` templates into an immutable
//! token tree and renders them against a [`fastache_core::Value`], reporting
//! unresolved variables as diagnostics with template/line context.
//!
//! ## Usage
//!
//! ```rust
//! use fastache_core::Value;
//! use fastache_renderer::{Diagnostic, Renderer, Template};
//!
//! let template = Template::compile(
//!     "list",
//!     "{{#items}}{{name}}{{|}}, {{/|}}{{/items}}",
//! ).unwrap();
//! let data: Value = serde_json::json!({
//!     "items": [{ "name": "a" }, { "name": "b" }]
//! }).into();
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let out = Renderer::new()
//!     .render_to_string(&template, &data, &mut diagnostics)
//!     .unwrap();
//! assert_eq!(out, "a, b");
//! assert!(diagnostics.is_empty());
//! ```

pub mod compiler;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod ident;
pub mod output;
pub mod resolve;
pub mod scope;
pub mod sink;
pub mod template;
pub mod token;

pub use config::{DiagnosticPolicy, RenderOptions};
pub use diagnostics::{Diagnostic, Diagnostics, LogDiagnostics, Severity};
pub use engine::{RenderSummary, Renderer};
pub use error::{CompileError, ConfigError, IdentifierError, RenderError};
pub use ident::Identifier;
pub use resolve::{resolve, NotFound};
pub use scope::{FrameOrigin, ScopeChain};
pub use sink::Sink;
pub use template::Template;
pub use token::{Section, SectionKind, Token, TokenKind};
