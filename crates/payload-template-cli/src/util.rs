use std::fs;
use std::io::{self, Read};

use anyhow::Context as _;
use clap::ValueEnum;
use payload_template::FieldType;
use serde_json::Value;

/// Read input from file path or stdin.
/// - `None` or `Some("-")` reads from stdin
/// - `Some(path)` reads from file
pub fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Error reading from stdin")?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Error reading {path}")),
    }
}

/// Helper to get display path for error messages
pub fn display_path(file: Option<&str>) -> &str {
    match file {
        None | Some("-") => "<stdin>",
        Some(path) => path,
    }
}

/// Read and parse a JSON context document.
pub fn read_context(file: &str) -> anyhow::Result<Value> {
    let file = Some(file);
    let contents = read_input(file)?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON context in {}", display_path(file)))
}

pub fn print_json(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let serialized = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    let output = serialized.context("Error serializing JSON")?;
    println!("{output}");
    Ok(())
}

/// Field type accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FieldKind {
    /// Text; other values are serialized to JSON
    String,
    /// Finite number; numeric strings are parsed
    Double,
    /// JSON value; strings are parsed as JSON when possible
    Object,
}

impl From<FieldKind> for FieldType {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => FieldType::String,
            FieldKind::Double => FieldType::Double,
            FieldKind::Object => FieldType::Object,
        }
    }
}
