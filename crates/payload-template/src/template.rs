//! `{{ path }}` interpolation.
//!
//! A template that consists of exactly one placeholder yields the raw value
//! at that path, so numbers and objects keep their shape. Any other template
//! is rendered to a string with every placeholder spliced in.

use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::number::display_number;
use crate::path::get_value_from_context;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^}]+?)\s*\}\}").expect("invalid placeholder regex")
});

static WHOLE_PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{\s*([^}]+?)\s*\}\}$").expect("invalid whole placeholder regex")
});

/// Render `template` against `context`.
///
/// - Blank template: `Value::Null`.
/// - Exactly one placeholder: the value at its path, cloned; `Value::Null`
///   when the path does not resolve.
/// - Otherwise: a string where each placeholder is replaced by the text of its
///   value. Missing and `null` values become `""`, objects and arrays become
///   compact JSON. A template without placeholders is returned unchanged.
pub fn render_template(template: &str, context: &Value, sink: &dyn DiagnosticSink) -> Value {
    let trimmed = template.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }

    if let Some(cap) = WHOLE_PLACEHOLDER_PATTERN.captures(trimmed) {
        return get_value_from_context(context, &cap[1])
            .cloned()
            .unwrap_or(Value::Null);
    }

    let rendered = PLACEHOLDER_PATTERN.replace_all(template, |cap: &Captures<'_>| {
        let expression = &cap[1];
        match get_value_from_context(context, expression) {
            None => String::new(),
            Some(value) => splice_text(expression, value, sink),
        }
    });
    Value::String(rendered.into_owned())
}

/// Path expressions referenced by `template`, trimmed, in order of appearance.
///
/// ```
/// use payload_template::template_expressions;
///
/// assert_eq!(
///     template_expressions("{{ page.title }} / {{chunk.heading}}"),
///     vec!["page.title", "chunk.heading"]
/// );
/// ```
pub fn template_expressions(template: &str) -> Vec<&str> {
    PLACEHOLDER_PATTERN
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .collect()
}

fn splice_text(expression: &str, value: &Value, sink: &dyn DiagnosticSink) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value)
            .map_err(|e| Diagnostic::PlaceholderStringify {
                expression: expression.to_string(),
                message: e.to_string(),
            })
            .unwrap_or_else(|diagnostic| {
                sink.report(&diagnostic);
                String::new()
            }),
    }
}
