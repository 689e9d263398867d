use pocket2joplin::cli::args::Args;
// src/main.rs
use anyhow::Result;
use clap::Parser;
use pocket2joplin::config::dotenv_warning;
use tracing::{warn, Level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Before the subscriber, so RUST_LOG may come from .env
    let dotenv = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("pocket2joplin={}", filter).parse()?),
        )
        .init();

    if let Some(warning) = dotenv_warning(&dotenv) {
        warn!("{}", warning);
    }

    if let Some(diagnostic) = pocket2joplin::run_to_completion(args) {
        eprintln!("{}", diagnostic);
    }
    Ok(())
}
