//! End-to-end template rendering: compile, render, inspect output and
//! diagnostics.

use std::sync::Arc;
use std::thread;

use fastache_core::Value;
use fastache_renderer::{
    CompileError, Diagnostic, DiagnosticPolicy, RenderOptions, Renderer, Severity, Template,
};
use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;

fn render(source: &str, data: serde_json::Value) -> (String, Vec<Diagnostic>) {
    render_with(&Renderer::new(), source, data)
}

fn render_with(
    renderer: &Renderer,
    source: &str,
    data: serde_json::Value,
) -> (String, Vec<Diagnostic>) {
    let template = Template::compile("page.mustache", source).expect("compile");
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let out = renderer
        .render_to_string(&template, &Value::from(data), &mut diagnostics)
        .expect("render");
    (out, diagnostics)
}

// ---------------------------------------------------------------------------
// 1. Documented scenarios
// ---------------------------------------------------------------------------

#[test]
fn item_list_with_separator() {
    let (out, diags) = render(
        "{{#items}}{{name}}{{|}}, {{/|}}{{/items}}",
        json!({ "items": [{ "name": "a" }, { "name": "b" }] }),
    );
    assert_eq!(out, "a, b");
    assert!(diags.is_empty());
}

#[test]
fn missing_dotted_variable_reports_full_path_exactly_once() {
    let (out, diags) = render("{{missing.field}}", json!({}));
    assert_eq!(out, "");
    let full: Vec<_> = diags
        .iter()
        .filter(|d| d.message.contains("'missing.field'"))
        .collect();
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].severity, Severity::Warning);
    assert_eq!(full[0].to_string(), "page.mustache:1: warning: variable 'missing.field' not found");
}

/// The detailed policy adds a partial-path warning on top of the full-path
/// one; the deduplicated policy drops it.
#[rstest]
#[case(DiagnosticPolicy::Detailed, &["variable 'missing' not found", "variable 'missing.field' not found"])]
#[case(DiagnosticPolicy::Deduplicated, &["variable 'missing.field' not found"])]
fn double_diagnostic_depends_on_policy(
    #[case] policy: DiagnosticPolicy,
    #[case] expected: &[&str],
) {
    let renderer = Renderer::with_options(RenderOptions {
        diagnostics: policy,
        ..RenderOptions::default()
    });
    let (_, diags) = render_with(&renderer, "{{missing.field}}", json!({}));
    let messages: Vec<_> = diags.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, expected);
}

// ---------------------------------------------------------------------------
// 2. Iteration counts
// ---------------------------------------------------------------------------

#[rstest]
#[case(0, "", "")]
#[case(1, "0", "")]
#[case(2, "01", ",")]
#[case(5, "01234", ",,,,")]
fn body_and_separator_counts(#[case] n: usize, #[case] body: &str, #[case] seps: &str) {
    let items: Vec<_> = (0..n).map(|i| json!(i)).collect();

    let (out, _) = render("{{#items}}{{.}}{{/items}}", json!({ "items": items.clone() }));
    assert_eq!(out, body, "body renders once per element, in order");

    let (out, _) = render("{{#items}}{{|}},{{/|}}{{/items}}", json!({ "items": items }));
    assert_eq!(out, seps, "separator renders n - 1 times");
}

#[test]
fn last_flag_is_restored_after_an_empty_list() {
    let (out, _) = render(
        "{{#rows}}{{#cells}}{{.}}{{/cells}}{{|}};{{/|}}{{/rows}}",
        json!({ "rows": [{ "cells": [] }, { "cells": [1, 2] }, { "cells": [] }] }),
    );
    assert_eq!(out, ";12;");
}

// ---------------------------------------------------------------------------
// 3. Truthiness
// ---------------------------------------------------------------------------

#[rstest]
#[case("missing", json!({}), "", "inv")]
#[case("false", json!({ "v": false }), "", "inv")]
#[case("null", json!({ "v": null }), "", "inv")]
#[case("true", json!({ "v": true }), "yes", "")]
#[case("zero", json!({ "v": 0 }), "yes", "")]
#[case("empty string", json!({ "v": "" }), "yes", "")]
#[case("empty mapping", json!({ "v": {} }), "yes", "")]
#[case("empty sequence", json!({ "v": [] }), "", "")]
fn normal_and_inverted_truthiness(
    #[case] label: &str,
    #[case] data: serde_json::Value,
    #[case] normal: &str,
    #[case] inverted: &str,
) {
    let (out, _) = render("{{#v}}yes{{/v}}", data.clone());
    assert_eq!(out, normal, "[{label}] normal section");
    let (out, _) = render("{{^v}}inv{{/v}}", data);
    assert_eq!(out, inverted, "[{label}] inverted section");
}

// ---------------------------------------------------------------------------
// 4. Realistic template
// ---------------------------------------------------------------------------

#[test]
fn report_template_renders_nested_data() {
    let source = "\
# {{title}}
{{#author}}by {{name}} <{{contact.email}}>{{/author}}
{{#sections}}
## {{heading}} ({{pages}} pages){{#draft}} [draft]{{/draft}}
tags: {{#tags}}{{.}}{{|}}, {{/|}}{{/tags}}{{^tags}}none{{/tags}}
{{/sections}}";
    let data = json!({
        "title": "Quarterly",
        "author": { "name": "Ada", "contact": { "email": "ada@example.org" } },
        "sections": [
            { "heading": "Intro", "pages": 2, "draft": false, "tags": ["a", "b"] },
            { "heading": "Numbers", "pages": 10, "draft": true }
        ]
    });
    let (out, diags) = render(source, data);
    let expected = "\
# Quarterly
by Ada <ada@example.org>

## Intro (2 pages)
tags: a, b

## Numbers (10 pages) [draft]
tags: none
";
    assert_eq!(out, expected);
    assert!(diags.is_empty(), "unexpected diagnostics: {diags:?}");
}

// ---------------------------------------------------------------------------
// 5. Compile errors, reuse, concurrency, files
// ---------------------------------------------------------------------------

#[test]
fn compile_errors_block_rendering() {
    let err = Template::compile("bad.mustache", "{{#open}}never closed").unwrap_err();
    assert!(matches!(err, CompileError::Syntax { .. }));
    assert_eq!(err.to_string(), "1 errors occurred while parsing bad.mustache");
}

#[test]
fn one_template_renders_many_times() {
    let template = Template::compile("t", "{{n}}").expect("compile");
    let renderer = Renderer::new();
    for n in 0..3 {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let out = renderer
            .render_to_string(&template, &Value::from(json!({ "n": n })), &mut diagnostics)
            .expect("render");
        assert_eq!(out, n.to_string());
    }
}

#[test]
fn concurrent_renders_share_one_template() {
    let template = Arc::new(
        Template::compile("t", "{{#xs}}{{.}}{{|}}-{{/|}}{{/xs}}").expect("compile"),
    );
    let renderer = Arc::new(Renderer::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let template = Arc::clone(&template);
            let renderer = Arc::clone(&renderer);
            thread::spawn(move || {
                let data = Value::from(json!({ "xs": [i, i + 1] }));
                let mut diagnostics: Vec<Diagnostic> = Vec::new();
                renderer
                    .render_to_string(&template, &data, &mut diagnostics)
                    .expect("render")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().expect("join"), format!("{}-{}", i, i + 1));
    }
}

#[test]
fn file_template_to_file_output() {
    let dir = TempDir::new().expect("tempdir");
    let template_path = dir.path().join("greet.mustache");
    std::fs::write(&template_path, "Hi {{who}}, {{flag}}\n").expect("write");
    let out_path = dir.path().join("out").join("greet.txt");

    let template = Template::from_file(&template_path).expect("compile");
    let summary = Renderer::new()
        .render_to_file(&template, &Value::from(json!({ "who": "Bo", "flag": true })), &out_path)
        .expect("render");

    assert_eq!(summary.warnings, 0);
    assert_eq!(std::fs::read_to_string(&out_path).expect("read"), "Hi Bo, True\n");
}
