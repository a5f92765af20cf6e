//! Terminal and JSON output

use colored::Colorize;
use ringlog_core::LoggerConfig;
use ringlog_logs::RotationState;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Run result as printed in JSON mode
#[derive(Serialize)]
pub struct RunSummary<'a> {
    pub messages: usize,
    pub config: &'a LoggerConfig,
    pub state: RotationState,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Print the outcome of a logging run
pub fn print_summary(messages: usize, config: &LoggerConfig, state: RotationState) {
    if is_json_mode() {
        print_json(&RunSummary {
            messages,
            config,
            state,
        });
        return;
    }

    print_success(&format!("Logged {} messages", messages));
    print_info(&format!(
        "file {} ({}), line {}/{}, cycles {}",
        state.file_index,
        config.file_path(state.file_index).display(),
        state.line_count,
        config.max_lines_per_file(),
        state.cycle_count
    ));
    if state.dropped > 0 {
        print_error(&format!("{} messages could not be written", state.dropped));
    }
}

/// Print a resolved configuration
pub fn print_config(config: &LoggerConfig) {
    if is_json_mode() {
        print_json(config);
        return;
    }

    println!("max_files          {}", config.max_files());
    println!("max_lines_per_file {}", config.max_lines_per_file());
    println!("file_prefix        {}", config.file_prefix());
    println!("ring_capacity      {}", config.ring_capacity());
}
