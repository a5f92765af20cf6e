//! Show-config command implementation

use anyhow::Result;
use ringlog_core::LoggerConfig;

use crate::output::print_config;

pub fn execute(config: &LoggerConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
