//! Payload records built from field declarations.

use serde_json::{Map, Value};

use crate::array::normalize_array_value;
use crate::cast::cast_value_to_type;
use crate::diagnostic::DiagnosticSink;
use crate::schema::FieldDeclaration;
use crate::template::render_template;

/// Field name to typed value, in declaration order.
pub type OutputRecord = Map<String, Value>;

/// Evaluate every field declaration against `context`.
///
/// Fields with a blank name are skipped. Names are trimmed; when two fields
/// share a name the later value wins and keeps the earlier position.
pub fn build_record(
    fields: &[FieldDeclaration],
    context: &Value,
    sink: &dyn DiagnosticSink,
) -> OutputRecord {
    let mut record = OutputRecord::new();
    for field in fields {
        let name = field.name.trim();
        if name.is_empty() {
            continue;
        }
        record.insert(name.to_string(), evaluate_field(field, context, sink));
    }
    record
}

/// Render, cast and shape one field's value; the field name is not consulted.
pub(crate) fn evaluate_field(
    field: &FieldDeclaration,
    context: &Value,
    sink: &dyn DiagnosticSink,
) -> Value {
    let rendered = render_template(&field.template, context, sink);
    let typed = cast_value_to_type(rendered, field.field_type, sink);
    normalize_array_value(typed, field.is_array)
}

/// [`build_record`] for each context, in order.
pub fn build_records<'a, I>(
    fields: &[FieldDeclaration],
    contexts: I,
    sink: &dyn DiagnosticSink,
) -> Vec<OutputRecord>
where
    I: IntoIterator<Item = &'a Value>,
{
    contexts
        .into_iter()
        .map(|context| build_record(fields, context, sink))
        .collect()
}
