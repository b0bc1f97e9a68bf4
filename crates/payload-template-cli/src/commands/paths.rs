use payload_template::{EnumerateConfig, PayloadEngine};

use crate::util::read_context;

#[derive(clap::Args)]
pub struct Args {
    /// Path to the JSON context (use - for stdin)
    #[arg(short, long, default_value = "-")]
    pub context: String,
    /// Maximum number of paths to list
    #[arg(short, long, default_value_t = EnumerateConfig::default().limit)]
    pub limit: usize,
    /// Number of leading array elements to explore
    #[arg(long, default_value_t = EnumerateConfig::default().array_sample)]
    pub array_sample: usize,
    /// Print each path as a `{{ ... }}` placeholder
    #[arg(long)]
    pub placeholders: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let context = read_context(&args.context)?;
    let config = EnumerateConfig {
        limit: args.limit,
        array_sample: args.array_sample,
        ..EnumerateConfig::default()
    };
    let paths = PayloadEngine::new().enumerate_config(config).paths(&context);

    for path in paths {
        if args.placeholders {
            println!("{{{{ {path} }}}}");
        } else {
            println!("{path}");
        }
    }
    Ok(())
}
