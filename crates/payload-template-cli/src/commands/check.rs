use payload_template::{CollectionSchema, check_fields};

use crate::util::read_context;

#[derive(clap::Args)]
pub struct Args {
    /// Path to the collection schema
    #[arg(short, long)]
    pub schema: String,
    /// Sample JSON context to resolve placeholders against (use - for stdin)
    #[arg(short, long)]
    pub context: Option<String>,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let schema = CollectionSchema::load(&args.schema)?;
    let context = args.context.as_deref().map(read_context).transpose()?;

    let issues = check_fields(&schema.fields, context.as_ref());
    if issues.is_empty() {
        println!("{}: {} fields, no issues", args.schema, schema.fields.len());
        return Ok(());
    }

    for issue in &issues {
        println!("{}: {issue}", args.schema);
    }
    anyhow::bail!("{} issue(s) found", issues.len())
}
