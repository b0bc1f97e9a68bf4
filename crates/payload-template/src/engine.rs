use serde_json::Value;

use crate::cast::cast_value_to_type;
use crate::config::EnumerateConfig;
use crate::diagnostic::{DiagnosticSink, TracingSink};
use crate::enumerate::collect_template_paths_with_config;
use crate::record::{OutputRecord, build_record, build_records, evaluate_field};
use crate::schema::{CollectionSchema, FieldDeclaration, FieldType};
use crate::template::render_template;

/// Evaluation entry point bundling a diagnostic sink and enumeration bounds.
///
/// The engine holds no per-call state, so one instance can serve any number
/// of evaluations, including from several threads when `S: Sync`.
#[derive(Debug, Clone, Default)]
pub struct PayloadEngine<S = TracingSink> {
    sink: S,
    enumerate: EnumerateConfig,
}

impl PayloadEngine<TracingSink> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: DiagnosticSink> PayloadEngine<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            enumerate: EnumerateConfig::default(),
        }
    }

    pub fn enumerate_config(mut self, config: EnumerateConfig) -> Self {
        self.enumerate = config;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn render(&self, template: &str, context: &Value) -> Value {
        render_template(template, context, &self.sink)
    }

    pub fn cast(&self, value: Value, field_type: FieldType) -> Value {
        cast_value_to_type(value, field_type, &self.sink)
    }

    /// Render, cast and shape a single field.
    pub fn evaluate_field(&self, field: &FieldDeclaration, context: &Value) -> Value {
        evaluate_field(field, context, &self.sink)
    }

    pub fn build_record(&self, fields: &[FieldDeclaration], context: &Value) -> OutputRecord {
        build_record(fields, context, &self.sink)
    }

    pub fn build_schema_record(&self, schema: &CollectionSchema, context: &Value) -> OutputRecord {
        self.build_record(&schema.fields, context)
    }

    pub fn build_records<'a, I>(&self, fields: &[FieldDeclaration], contexts: I) -> Vec<OutputRecord>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        build_records(fields, contexts, &self.sink)
    }

    /// Paths available for authoring against `source`, within the configured bounds.
    pub fn paths(&self, source: &Value) -> Vec<String> {
        collect_template_paths_with_config(source, &self.enumerate)
    }
}
