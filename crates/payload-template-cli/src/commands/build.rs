use payload_template::{CollectionSchema, PayloadEngine};
use serde_json::Value;

use crate::util::{print_json, read_context};

#[derive(clap::Args)]
pub struct Args {
    /// Path to the collection schema (`{"fields": [...]}` or a bare field array)
    #[arg(short, long)]
    pub schema: String,
    /// Path to the JSON context (use - for stdin)
    #[arg(short, long, default_value = "-")]
    pub context: String,
    /// Treat the context as an array and build one record per element
    #[arg(long)]
    pub each: bool,
    /// Pretty print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let schema = CollectionSchema::load(&args.schema)?;
    let context = read_context(&args.context)?;
    let engine = PayloadEngine::new();

    let output = if args.each {
        let Value::Array(contexts) = &context else {
            anyhow::bail!("--each expects the context to be a JSON array");
        };
        tracing::debug!(records = contexts.len(), "building records");
        Value::Array(
            engine
                .build_records(&schema.fields, contexts)
                .into_iter()
                .map(Value::Object)
                .collect(),
        )
    } else {
        Value::Object(engine.build_schema_record(&schema, &context))
    };
    print_json(&output, args.pretty)
}
