//! Log command implementation

use anyhow::Result;
use ringlog_core::LoggerConfig;
use ringlog_logs::RotatingLogger;

use crate::cli::LogArgs;
use crate::output::print_summary;

pub async fn execute(config: LoggerConfig, args: LogArgs) -> Result<()> {
    let logger = RotatingLogger::new(config);
    let (sender, shutdown) = logger.start();

    let count = args.messages.len();
    let sent = sender.send_all(args.messages).await;
    let state = shutdown.shutdown().await?;
    sent?;

    print_summary(count, logger.config(), state);
    Ok(())
}
