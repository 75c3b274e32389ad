//! Lektor CLI entry point.

use anyhow::Result;
use clap::Parser;
use lektor::cli::{commands, preflight, Cli, Output};
use lektor::config::Prompts;
use lektor::generate::OpenAIGenerator;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("lektor={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if !cli.extract && !cli.exam_gen {
        Output::warning("Neither --extract nor --exam_gen given, nothing to do");
        return Ok(());
    }

    // Both phases call the generation service
    if let Err(e) = preflight::check() {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let prompts = Prompts::load(cli.prompts.as_deref())?;
    let generator = Arc::new(OpenAIGenerator::new(&cli.model));

    if cli.extract {
        commands::run_extract(
            &cli.subtitles_dir(),
            &cli.gems_dir(),
            generator.clone(),
            &prompts,
        )
        .await?;
    }

    if cli.exam_gen {
        commands::run_exam(&cli.gems_dir(), generator, &prompts).await?;
    }

    Ok(())
}
