//! Trial command implementation

use anyhow::Result;
use ringlog_core::LoggerConfig;
use ringlog_logs::{run_trial, TrialMessages};

use crate::cli::TrialArgs;
use crate::output::print_summary;

pub async fn execute(config: LoggerConfig, args: TrialArgs) -> Result<()> {
    let messages = if args.random {
        TrialMessages::Random
    } else {
        TrialMessages::Fixed(args.message)
    };

    let state = run_trial(config.clone(), args.count, messages).await?;

    print_summary(args.count as usize, &config, state);
    Ok(())
}
