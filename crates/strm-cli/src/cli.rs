//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Mirror a TorrServer torrent list into a tree of .strm pointer files
#[derive(Parser, Debug)]
#[command(name = "strmsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TorrServer base URL, e.g. http://127.0.0.1:8090
    #[arg(long)]
    pub api_url: String,

    /// Directory to create the STRM structure in
    #[arg(long)]
    pub output_dir: PathBuf,

    /// HTTP basic auth username
    #[arg(long)]
    pub username: Option<String>,

    /// HTTP basic auth password
    #[arg(long)]
    pub password: Option<String>,

    /// Polling interval in seconds
    #[arg(long, default_value_t = 2.0)]
    pub interval: f64,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Remove .strm files that are no longer in the TorrServer list
    #[arg(long)]
    pub cleanup: bool,

    /// Run sync once and exit
    #[arg(long)]
    pub once: bool,

    /// Preview changes without writing or deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Use ASCII-only names for dirs/files (e.g. Movies, TV).
    /// Auto-enabled when the locale is not UTF-8
    #[arg(long)]
    pub ascii_names: bool,
}
