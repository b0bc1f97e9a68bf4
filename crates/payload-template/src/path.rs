//! Path expressions over JSON contexts.
//!
//! A path expression addresses a location with `a.b[0].c` syntax. Anything
//! after the first `|` is a filter suffix; it is accepted and ignored.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// A property-name run, or a bracketed index whose digits are captured.
static SEGMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.\[\]]+|\[([0-9]+)\]").expect("invalid segment regex"));

/// Split a path (without filter suffix) into its segments.
///
/// Property names and array indices are returned in the order they appear.
/// Separators are dropped, and bracket characters that do not enclose digits
/// are skipped without producing a segment.
///
/// ```
/// use payload_template::parse_path_segments;
///
/// assert_eq!(parse_path_segments("items[0].name"), vec!["items", "0", "name"]);
/// assert_eq!(parse_path_segments("a[x]"), vec!["a", "x"]);
/// ```
pub fn parse_path_segments(path: &str) -> Vec<&str> {
    SEGMENT_PATTERN
        .captures_iter(path)
        .filter_map(|cap| cap.get(1).or_else(|| cap.get(0)))
        .map(|m| m.as_str())
        .collect()
}

/// Resolve a path expression against `context`.
///
/// Returns `None` when the location does not exist: a missing key, an index
/// out of range or not made of digits, or a step into a scalar or `null`.
/// A location holding `null` resolves to `Some(&Value::Null)`.
pub fn get_value_from_context<'a>(context: &'a Value, expression: &str) -> Option<&'a Value> {
    let expression = expression.trim();
    if expression.is_empty() {
        return None;
    }

    let path = strip_filter(expression);
    let mut current = context;
    for segment in parse_path_segments(path) {
        current = step(current, segment)?;
    }
    Some(current)
}

fn strip_filter(expression: &str) -> &str {
    match expression.split_once('|') {
        Some((path, _filter)) => path.trim_end(),
        None => expression,
    }
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Array(items) => items.get(parse_index(segment)?),
        Value::Object(map) => map.get(segment),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
