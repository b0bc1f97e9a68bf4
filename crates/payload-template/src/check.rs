//! Authoring checks for field declarations.
//!
//! Record building tolerates every problem reported here. These checks let a
//! schema editor point them out before records are written.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::path::get_value_from_context;
use crate::schema::FieldDeclaration;
use crate::template::template_expressions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// The field name is blank, so the field is never written.
    EmptyName { index: usize },
    /// Several fields share a name; only the last one is kept.
    DuplicateName { name: String, indices: Vec<usize> },
    /// A placeholder does not resolve against the sample context.
    UnresolvedReference {
        index: usize,
        field: String,
        expression: String,
    },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::EmptyName { index } => write!(f, "field #{index} has an empty name"),
            FieldIssue::DuplicateName { name, indices } => {
                let positions: Vec<String> = indices.iter().map(|i| format!("#{i}")).collect();
                write!(
                    f,
                    "field name `{name}` is used by fields {}",
                    positions.join(", ")
                )
            }
            FieldIssue::UnresolvedReference {
                field, expression, ..
            } => write!(f, "field `{field}` references unknown path `{expression}`"),
        }
    }
}

/// Check `fields` for blank or repeated names, and, when a sample `context`
/// is given, for placeholders that do not resolve against it.
///
/// Issues are grouped by kind: empty names, then duplicates, then references.
pub fn check_fields(fields: &[FieldDeclaration], context: Option<&Value>) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let mut by_name: IndexMap<&str, Vec<usize>> = IndexMap::new();

    for (index, field) in fields.iter().enumerate() {
        let name = field.name.trim();
        if name.is_empty() {
            issues.push(FieldIssue::EmptyName { index });
        } else {
            by_name.entry(name).or_default().push(index);
        }
    }

    issues.extend(
        by_name
            .into_iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(name, indices)| FieldIssue::DuplicateName {
                name: name.to_string(),
                indices,
            }),
    );

    if let Some(context) = context {
        for (index, field) in fields.iter().enumerate() {
            let name = field.name.trim();
            if name.is_empty() {
                continue;
            }
            for expression in template_expressions(&field.template) {
                if get_value_from_context(context, expression).is_none() {
                    issues.push(FieldIssue::UnresolvedReference {
                        index,
                        field: name.to_string(),
                        expression: expression.to_string(),
                    });
                }
            }
        }
    }

    issues
}
