//! fosdem-schedule CLI entry point.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use fosdem_core::{ExportFormat, ScheduleConfig, ScheduleScraper};

mod cli;

use cli::Cli;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Schedule(#[from] fosdem_core::ScheduleError),

    #[error("unable to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let format = ExportFormat::from(cli.format);
    let config = ScheduleConfig {
        new_tab_links: cli.new_tab,
        ..ScheduleConfig::default()
    };

    let scraper = ScheduleScraper::with_config(config)?;
    let events = scraper.fetch_schedule().await?;
    for event in &events {
        tracing::debug!("{} {}", event.start, event.title_text);
    }

    let rendered = format.render(&events);
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
    fs::write(&output, rendered)?;

    println!("Wrote {} events to {}", events.len(), output.display());
    Ok(())
}
