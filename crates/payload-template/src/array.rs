use serde_json::Value;

/// Shape `value` to match a field's array-ness.
///
/// Non-array fields get `value` back untouched. Array fields get arrays
/// as-is, `[]` for `null` or blank strings, and a one-element array for
/// everything else.
pub fn normalize_array_value(value: Value, is_array: bool) -> Value {
    if !is_array {
        return value;
    }
    match value {
        Value::Null => Value::Array(Vec::new()),
        Value::Array(_) => value,
        Value::String(ref s) if s.trim().is_empty() => Value::Array(Vec::new()),
        other => Value::Array(vec![other]),
    }
}
