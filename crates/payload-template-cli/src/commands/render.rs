use payload_template::PayloadEngine;

use crate::util::{FieldKind, print_json, read_context};

#[derive(clap::Args)]
pub struct Args {
    /// Template text, e.g. "Section: {{ chunk.heading }}"
    pub template: String,
    /// Path to the JSON context (use - for stdin)
    #[arg(short, long, default_value = "-")]
    pub context: String,
    /// Cast the rendered value to a field type
    #[arg(short = 't', long = "type", value_enum)]
    pub field_type: Option<FieldKind>,
    /// Pretty print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let context = read_context(&args.context)?;
    let engine = PayloadEngine::new();

    let mut value = engine.render(&args.template, &context);
    if let Some(field_type) = args.field_type {
        value = engine.cast(value, field_type.into());
    }
    print_json(&value, args.pretty)
}
