// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use pagewarm_cli::commands;
use pagewarm_cli::config::{Config, Overrides};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagewarm")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Warm up app-router pages on a running dev server", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Quiet mode: only show failures and the final summary
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover static routes and warm them up (default)
    Run,
    /// List discovered routes in warm-up order without sending requests
    Routes,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load()?;
    config.apply(&cli.overrides);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(&config, cli.quiet).await,
        Commands::Routes => commands::routes::run(&config, cli.quiet),
    }
}
