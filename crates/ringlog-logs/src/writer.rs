//! Per-message file appends with slot recycling

use chrono::{DateTime, Local};
use ringlog_core::{LoggerConfig, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Format a timestamped log line (without the trailing newline).
///
/// Embedded line breaks are escaped as `\n` / `\r` so every message
/// occupies exactly one physical line.
pub fn render(now: DateTime<Local>, message: &str) -> String {
    let mut line = format!("[{}] ", now.format("%Y-%m-%d %H:%M:%S%.9f %:z"));
    line.reserve(message.len());
    for c in message.chars() {
        match c {
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            _ => line.push(c),
        }
    }
    line
}

/// Appends lines to the file backing a ring slot.
///
/// No handle is held between calls: every append opens, writes, and closes
/// the file, so external readers can tail the files between writes.
#[derive(Debug, Clone)]
pub struct FileWriter {
    config: LoggerConfig,
}

impl FileWriter {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Get the path of a ring slot
    pub fn path(&self, file_index: usize) -> PathBuf {
        self.config.file_path(file_index)
    }

    /// Append `line` to slot `file_index`.
    ///
    /// `fresh` marks the first line written to the slot in the current cycle;
    /// any content left over from an earlier cycle is truncated first.
    pub fn append(&self, file_index: usize, fresh: bool, line: &str) -> Result<()> {
        let path = self.path(file_index);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&path)?;

        if fresh && file.metadata()?.len() > 0 {
            debug!("Recycling log file: {}", path.display());
            file.set_len(0)?;
        }

        let mut bytes = Vec::with_capacity(line.len() + 1);
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
        file.write_all(&bytes)?;

        Ok(())
    }
}
