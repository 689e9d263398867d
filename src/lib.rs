// src/lib.rs
pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod util;

use anyhow::Result;
use application::{ArticleSource, NoteService, SyncOrchestrator};
use config::{Config, FileConfig, Overrides};
use domain::{DomainError, SyncReport};
use infrastructure::{JoplinClient, PocketClient};
use tracing::{debug, info};

use crate::cli::args::Args;

pub const COMPLETION_MESSAGE: &str = "All articles have been processed.";

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting pocket2joplin with arguments");

    let file = FileConfig::load_or_default(args.config.as_deref())?;
    let overrides = Overrides {
        joplin_url: args.joplin_url,
        tag: args.tag,
        folder: args.folder,
    };
    let config = Config::from_env(file, &overrides)?;
    debug!(?config, "Resolved configuration");

    let source = PocketClient::new(config.pocket.clone());
    let service = JoplinClient::new(&config.joplin);
    info!(joplin = %config.joplin.base_url, "Syncing unread Pocket articles");

    let report = sync(source, service, &config)?;
    println!("{}", COMPLETION_MESSAGE);
    println!("{}", summary(&report));

    Ok(())
}

/// Run to completion, returning the one-line diagnostic of a fatal error.
///
/// Fatal errors are reported, not propagated: the process exit status
/// never depends on how the sync went.
pub fn run_to_completion(args: Args) -> Option<String> {
    run(args).err().map(|e| format!("Error: {e:#}"))
}

/// Run the pipeline against any article source and note service.
///
/// Errors returned here are fatal; per-article failures are in the report.
pub fn sync<A: ArticleSource, S: NoteService>(
    source: A,
    service: S,
    config: &Config,
) -> Result<SyncReport, DomainError> {
    let mut orchestrator = SyncOrchestrator::new(
        source,
        service,
        config.sync.tag_title.as_str(),
        config.sync.folder_title.as_str(),
    );
    orchestrator.run()
}

/// One-line outcome, e.g. "2 notes created, 1 failed"
pub fn summary(report: &SyncReport) -> String {
    let failed = report.attempted() - report.succeeded();
    format!("{} notes created, {} failed", report.succeeded(), failed)
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
