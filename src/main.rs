use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use create_express_app::{InitContext, commands, output};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "create-express-app",
    version = create_express_app::VERSION,
    about = "Fast and safe Express project scaffolder",
    long_about = "Creates a minimal Express project: validates the project name, checks that \
                  the target directory is safe to write into, writes package.json, installs \
                  dependencies with npm, and rolls back its own files if the install fails."
)]
struct Cli {
    /// Directory to create the project in
    project_directory: String,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.verbose {
        output::set_verbosity(output::Verbosity::Verbose);
    }

    let ctx = InitContext::new(&cli.project_directory)?;
    commands::create::execute(&ctx)
}

/// Install the global tracing subscriber, honoring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
