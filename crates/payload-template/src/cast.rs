//! Coercion of rendered values to declared field types.

use serde_json::Value;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::number::{display_number, number_from_f64, parse_float_prefix};
use crate::schema::FieldType;

/// Convert `value` to `field_type`.
///
/// `null` stays `null` for every type. Coercions are permissive: numeric
/// strings become doubles, JSON strings become objects, and anything becomes a
/// string. When a coercion is impossible the result is `null` for `double`
/// and the input itself for `object`.
pub fn cast_value_to_type(value: Value, field_type: FieldType, sink: &dyn DiagnosticSink) -> Value {
    if value.is_null() {
        return Value::Null;
    }
    match field_type {
        FieldType::Double => to_double(value),
        FieldType::Object => to_object(value, sink),
        FieldType::String => to_string(value, sink),
    }
}

fn to_double(value: Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => Value::Number(n),
            _ => Value::Null,
        },
        Value::String(s) => parse_float_prefix(&s)
            .and_then(number_from_f64)
            .unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn to_object(value: Value, sink: &dyn DiagnosticSink) -> Value {
    let Value::String(s) = value else {
        return value;
    };
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    parse_json(trimmed).unwrap_or_else(|diagnostic| {
        sink.report(&diagnostic);
        Value::String(trimmed.to_string())
    })
}

fn parse_json(text: &str) -> Result<Value, Diagnostic> {
    serde_json::from_str(text).map_err(|e| Diagnostic::ObjectParse {
        input: text.to_string(),
        message: e.to_string(),
    })
}

fn to_string(value: Value, sink: &dyn DiagnosticSink) -> Value {
    match value {
        Value::String(_) => value,
        Value::Number(n) => Value::String(display_number(&n)),
        other => {
            let text = stringify(&other).unwrap_or_else(|diagnostic| {
                sink.report(&diagnostic);
                format!("{other:?}")
            });
            Value::String(text)
        }
    }
}

fn stringify(value: &Value) -> Result<String, Diagnostic> {
    serde_json::to_string(value).map_err(|e| Diagnostic::StringStringify {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::{CollectingSink, NullSink};
    use serde_json::json;

    #[test]
    fn test_null_for_every_type() {
        for field_type in [FieldType::String, FieldType::Double, FieldType::Object] {
            assert_eq!(cast_value_to_type(Value::Null, field_type, &NullSink), Value::Null);
        }
    }

    #[test]
    fn test_double_from_numbers() {
        assert_eq!(cast_value_to_type(json!(42), FieldType::Double, &NullSink), json!(42));
        assert_eq!(cast_value_to_type(json!(2.5), FieldType::Double, &NullSink), json!(2.5));
    }

    #[test]
    fn test_double_from_strings() {
        assert_eq!(
            cast_value_to_type(json!("3.14"), FieldType::Double, &NullSink),
            json!(3.14)
        );
        assert_eq!(
            cast_value_to_type(json!(" 12px"), FieldType::Double, &NullSink),
            json!(12)
        );
        assert_eq!(cast_value_to_type(json!("abc"), FieldType::Double, &NullSink), Value::Null);
        assert_eq!(
            cast_value_to_type(json!("Infinity"), FieldType::Double, &NullSink),
            Value::Null
        );
    }

    #[test]
    fn test_double_from_other_types() {
        assert_eq!(cast_value_to_type(json!(true), FieldType::Double, &NullSink), Value::Null);
        assert_eq!(cast_value_to_type(json!([1]), FieldType::Double, &NullSink), Value::Null);
        assert_eq!(
            cast_value_to_type(json!({ "a": 1 }), FieldType::Double, &NullSink),
            Value::Null
        );
    }

    #[test]
    fn test_object_passthrough() {
        let object = json!({ "a": [1, 2] });
        assert_eq!(
            cast_value_to_type(object.clone(), FieldType::Object, &NullSink),
            object
        );
        assert_eq!(cast_value_to_type(json!([1]), FieldType::Object, &NullSink), json!([1]));
        assert_eq!(cast_value_to_type(json!(7), FieldType::Object, &NullSink), json!(7));
        assert_eq!(cast_value_to_type(json!(false), FieldType::Object, &NullSink), json!(false));
    }

    #[test]
    fn test_object_from_json_string() {
        assert_eq!(
            cast_value_to_type(json!(r#" {"a":1} "#), FieldType::Object, &NullSink),
            json!({ "a": 1 })
        );
        assert_eq!(cast_value_to_type(json!("   "), FieldType::Object, &NullSink), Value::Null);
    }

    #[test]
    fn test_object_parse_failure_falls_back_to_trimmed_string() {
        let sink = CollectingSink::new();
        assert_eq!(
            cast_value_to_type(json!("  not json "), FieldType::Object, &sink),
            json!("not json")
        );
        let diagnostics = sink.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            &diagnostics[0],
            Diagnostic::ObjectParse { input, .. } if input == "not json"
        ));
    }

    #[test]
    fn test_string_conversions() {
        assert_eq!(
            cast_value_to_type(json!("hello"), FieldType::String, &NullSink),
            json!("hello")
        );
        assert_eq!(cast_value_to_type(json!(42), FieldType::String, &NullSink), json!("42"));
        assert_eq!(cast_value_to_type(json!(true), FieldType::String, &NullSink), json!("true"));
        assert_eq!(
            cast_value_to_type(json!({ "a": [1, "x"] }), FieldType::String, &NullSink),
            json!(r#"{"a":[1,"x"]}"#)
        );
    }

    #[test]
    fn test_string_from_extreme_numbers() {
        assert_eq!(cast_value_to_type(json!(1e21), FieldType::String, &NullSink), json!("1e+21"));
        assert_eq!(cast_value_to_type(json!(-1e-7), FieldType::String, &NullSink), json!("-1e-7"));
        assert_eq!(
            cast_value_to_type(json!(1e20), FieldType::String, &NullSink),
            json!("100000000000000000000")
        );
    }
}
