#![doc = include_str!("../README.md")]

mod array;
mod cast;
mod check;
mod config;
mod context;
mod diagnostic;
mod engine;
mod enumerate;
mod error;
mod number;
mod path;
mod record;
mod schema;
mod template;

pub use array::normalize_array_value;
pub use cast::cast_value_to_type;
pub use check::{FieldIssue, check_fields};
pub use config::EnumerateConfig;
pub use context::ContextBuilder;
pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use engine::PayloadEngine;
pub use enumerate::{collect_template_paths, collect_template_paths_with_config};
pub use error::SchemaError;
pub use path::{get_value_from_context, parse_path_segments};
pub use record::{OutputRecord, build_record, build_records};
pub use schema::{CollectionSchema, FieldDeclaration, FieldType};
pub use template::{render_template, template_expressions};
