//! Number parsing and display shared by templates and casting.

use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

/// Longest leading decimal literal: sign, digits with optional fraction, exponent.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("invalid float prefix regex")
});

static INFINITY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?Infinity").expect("invalid infinity regex"));

/// Parse the leading decimal literal of `input`, ignoring leading whitespace
/// and any trailing text. `"3.5kg"` gives `3.5`, `"abc"` gives `None`.
/// A leading `Infinity` parses to an infinite value.
pub(crate) fn parse_float_prefix(input: &str) -> Option<f64> {
    let input = input.trim_start();
    if let Some(m) = FLOAT_PREFIX.find(input) {
        return m.as_str().parse().ok();
    }
    INFINITY_PREFIX.find(input).map(|m| {
        if m.as_str().starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}

/// JSON number for a finite `f64`; integral values become integers so they
/// serialize without a fractional part.
pub(crate) fn number_from_f64(value: f64) -> Option<Value> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        return Some(Value::Number(Number::from(value as i64)));
    }
    Number::from_f64(value).map(Value::Number)
}

/// Text form of a number: no trailing `.0` on integral floats, and exponent
/// notation (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub(crate) fn display_number(number: &Number) -> String {
    match number.as_f64() {
        Some(f) if number.is_f64() => display_f64(f),
        _ => number.to_string(),
    }
}

fn display_f64(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}
