use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod util;

#[derive(Parser)]
#[command(
    name = "payload-template",
    about = "Render payload templates and list context paths"
)]
struct Cli {
    /// Log diagnostics at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one template against a context
    Render(commands::render::Args),
    /// Build the payload record for a context from a collection schema
    Build(commands::build::Args),
    /// List the template paths available in a context
    Paths(commands::paths::Args),
    /// Report naming problems and unresolved references in a schema
    Check(commands::check::Args),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Build(args) => commands::build::run(args),
        Commands::Paths(args) => commands::paths::run(args),
        Commands::Check(args) => commands::check::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
