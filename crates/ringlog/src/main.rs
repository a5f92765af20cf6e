//! ringlog CLI - bounded, self-rotating append-only log writer

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_mode(cli.json);

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ringlog={0},ringlog_logs={0},ringlog_core={0}", log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let result = match resolve_config(&cli) {
        Ok(config) => match cli.command {
            Commands::Log(args) => log::execute(config, args).await,
            Commands::Trial(args) => trial::execute(config, args).await,
            Commands::ShowConfig => show_config::execute(&config),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        output::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
