//! Hubcard - GitHub profile lookup with a local cache
//!
//! Main entry point for the command-line application.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use hubcard_lib::{forget_profile, lookup_profile, AppContext, TerminalView};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hubcard", version, about = "Look up a GitHub profile, cache-first")]
struct Cli {
    /// GitHub username to look up
    username: String,

    /// Path to a config file (JSON or TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the cache database path
    #[arg(long)]
    db: Option<PathBuf>,

    /// Drop the cached record for the username instead of looking it up
    #[arg(long)]
    forget: bool,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hubcard=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => match hubcard_infra::config::load_from_file(Some(path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("hubcard: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => match hubcard_infra::config::load() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("hubcard: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    if let Some(db_path) = cli.db {
        config.database.path = db_path.to_string_lossy().into_owned();
    }

    let ctx = match AppContext::new_with_config(config) {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            eprintln!("hubcard: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.forget {
        return match forget_profile(&ctx, &cli.username).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("hubcard: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let view = TerminalView::new(cli.quiet);
    match lookup_profile(&ctx, &view, &cli.username).await {
        // Lookup-level failures are already rendered by the view
        Ok(record) if record.error => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hubcard: {err}");
            ExitCode::FAILURE
        }
    }
}
