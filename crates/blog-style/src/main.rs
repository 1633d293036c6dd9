mod cli;
mod config;
mod error;
mod format;
mod search;

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use error::AppError;
use search::SearchResults;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(AppError::Usage(message)) => {
            eprintln!("{message}");
            eprintln!("{}", cli::usage());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Runs one invocation and returns everything destined for stdout.
fn run(cli: &Cli) -> Result<String, AppError> {
    let query = if cli.list {
        None
    } else {
        let query = cli
            .query()
            .ok_or_else(|| AppError::Usage("no search query given".to_string()))?;
        Some(query)
    };

    let config = Config::resolve(cli.data_dir.clone())?;
    if !config.data_dir.is_dir() {
        warn!(
            data_dir = %config.data_dir.display(),
            "data directory not found, every collection is empty"
        );
    }

    let kinds = cli.kinds();
    let catalog = config.data_source().load_catalog(&kinds)?;

    let Some(query) = query else {
        info!(collections = kinds.len(), "listing catalog");
        return Ok(format::render_listing(&catalog, cli.json)?);
    };

    let results = SearchResults::search(&query, &catalog);
    info!(query = %query, total = results.total(), "search complete");
    Ok(format::render_search(&results, cli.json)?)
}
