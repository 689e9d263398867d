// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Copy unread Pocket articles into Joplin as tagged notes
///
/// Credentials are read from POCKET_CONSUMER_KEY, POCKET_ACCESS_TOKEN and
/// JOPLIN_TOKEN (a `.env` file in the working directory is honoured).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Joplin data API base URL [default: http://localhost:41184]
    #[arg(long, value_name = "URL")]
    pub joplin_url: Option<String>,

    /// Tag attached to every imported note [default: to_read]
    #[arg(short, long, value_name = "TITLE")]
    pub tag: Option<String>,

    /// Folder receiving the imported notes [default: Main]
    #[arg(short, long, value_name = "TITLE")]
    pub folder: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
