//! Field declarations and the collection schema that persists them.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Declared type of an output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Double,
    Object,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Double => write!(f, "double"),
            FieldType::Object => write!(f, "object"),
        }
    }
}

/// One output column of a payload record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub template: String,
}

impl FieldDeclaration {
    pub fn new(name: impl Into<String>, field_type: FieldType, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            is_array: false,
            template: template.into(),
        }
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }
}

/// The payload part of a collection configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSchema {
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
}

/// Either `{ "fields": [...] }` or a bare field array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaRepr {
    Wrapped(CollectionSchema),
    Bare(Vec<FieldDeclaration>),
}

impl CollectionSchema {
    pub fn new(fields: Vec<FieldDeclaration>) -> Self {
        Self { fields }
    }

    /// Parse a schema from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let repr: SchemaRepr = serde_json::from_str(text)?;
        Ok(match repr {
            SchemaRepr::Wrapped(schema) => schema,
            SchemaRepr::Bare(fields) => Self { fields },
        })
    }

    /// Read and parse a schema file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
