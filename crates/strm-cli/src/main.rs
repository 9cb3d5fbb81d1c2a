//! strm-sync CLI
//!
//! Mirrors a TorrServer torrent listing into a tree of `.strm` pointer
//! files that a media player can browse and stream.

mod cli;
mod driver;
mod error;

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use strm_api::{BasicAuth, TorrServerClient};
use strm_core::{SyncEngine, SyncOptions};
use strm_fs::{NamingMode, NormalizedPath};

use cli::Cli;
use driver::Driver;
use error::{CliError, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if !cli.interval.is_finite() || cli.interval < 0.0 {
        return Err(CliError::user("--interval must be a non-negative number"));
    }

    let mode = NamingMode::detect(cli.ascii_names);
    info!(
        api_url = %cli.api_url,
        output_dir = %cli.output_dir.display(),
        interval = cli.interval,
        ascii_names = mode.is_ascii(),
        cleanup = cli.cleanup,
        dry_run = cli.dry_run,
        "strm-sync starting"
    );

    // Establishing the output root is the only fatal filesystem error;
    // everything after this point is pass-scoped.
    let output_root = resolve_output_root(&cli.output_dir)?;
    info!(root = %output_root, "output root ready");

    let auth = basic_auth(cli.username, cli.password);
    let client = TorrServerClient::new(&cli.api_url, auth, Duration::from_secs(cli.timeout))?;
    let engine = SyncEngine::new(output_root);
    let options = SyncOptions {
        cleanup: cli.cleanup,
        dry_run: cli.dry_run,
    };

    let driver = Driver::new(
        client,
        engine,
        mode,
        options,
        Duration::from_secs_f64(cli.interval),
        cli.once,
    );
    driver.run().await;
    Ok(())
}

/// Make the output directory absolute and create it.
fn resolve_output_root(dir: &Path) -> Result<NormalizedPath> {
    let absolute = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(dir)
    };
    std::fs::create_dir_all(&absolute).map_err(|e| {
        CliError::user(format!(
            "cannot create output directory {}: {e}",
            absolute.display()
        ))
    })?;
    Ok(NormalizedPath::new(absolute))
}

/// Build credentials when either half was supplied; no header otherwise.
fn basic_auth(username: Option<String>, password: Option<String>) -> Option<BasicAuth> {
    if username.is_none() && password.is_none() {
        return None;
    }
    Some(BasicAuth {
        username: username.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}
