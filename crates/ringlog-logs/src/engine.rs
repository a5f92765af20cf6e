//! Rotation engine: one call per ingested message

use chrono::Local;
use ringlog_core::LoggerConfig;
use tracing::{debug, error};

use crate::capacity::{CapacityTracker, RotationState};
use crate::writer::{render, FileWriter};

/// Drives the capacity tracker and file writer for each message.
///
/// The full-file check runs before the write, so the line that finds its
/// file full lands in the next one. The ring-full check runs after the
/// write, so the line that fills the ring is still written and the wrap
/// only affects the following message.
#[derive(Debug)]
pub struct RotationEngine {
    config: LoggerConfig,
    tracker: CapacityTracker,
    writer: FileWriter,
}

impl RotationEngine {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            tracker: CapacityTracker::new(&config),
            writer: FileWriter::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn state(&self) -> RotationState {
        self.tracker.state()
    }

    /// Persist one message. Write failures are logged and the message dropped.
    pub fn ingest(&mut self, message: &str) {
        if self.tracker.advance_file_if_full() {
            debug!("Moving to log file {}", self.tracker.state().file_index);
        }

        let state = self.tracker.state();
        let line = render(Local::now(), message);
        if let Err(e) = self.writer.append(state.file_index, state.line_count == 0, &line) {
            error!(
                "Failed to write to {}: {}",
                self.writer.path(state.file_index).display(),
                e
            );
            self.tracker.record_drop();
            return;
        }
        self.tracker.record_line();

        if self.tracker.ring_is_full() {
            debug!("Rotating");
            self.tracker.wrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn engine_in(dir: &TempDir, files: i64, lines: i64) -> RotationEngine {
        let prefix = dir.path().join("t").to_string_lossy().into_owned();
        RotationEngine::new(LoggerConfig::new(files, lines, prefix).unwrap())
    }

    fn messages_in(engine: &RotationEngine, index: usize) -> Vec<String> {
        fs::read_to_string(engine.config().file_path(index))
            .unwrap()
            .lines()
            .map(|l| l.split_once("] ").unwrap().1.to_string())
            .collect()
    }

    #[test]
    fn test_two_by_two_scenario() {
        let dir = TempDir::new().unwrap();
        let mut engine = engine_in(&dir, 2, 2);

        for msg in ["a", "b"] {
            engine.ingest(msg);
        }
        assert_eq!(messages_in(&engine, 0), vec!["a", "b"]);

        for msg in ["c", "d", "e"] {
            engine.ingest(msg);
        }

        assert_eq!(messages_in(&engine, 0), vec!["e"]);
        assert_eq!(messages_in(&engine, 1), vec!["c", "d"]);
        let state = engine.state();
        assert_eq!((state.cycle_count, state.file_index, state.line_count), (1, 0, 1));
    }

    #[test]
    fn test_full_ring_wraps_to_zero() {
        let dir = TempDir::new().unwrap();
        let mut engine = engine_in(&dir, 3, 4);

        for i in 0..12 {
            engine.ingest(&format!("m{}", i));
        }

        let state = engine.state();
        assert_eq!((state.cycle_count, state.file_index, state.line_count), (1, 0, 0));
        assert_eq!(messages_in(&engine, 2), vec!["m8", "m9", "m10", "m11"]);
        assert!(!engine.config().file_path(3).exists());
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let mut engine = engine_in(&dir, 2, 5);

        for i in 0..4 {
            engine.ingest(&i.to_string());
        }

        let state = engine.state();
        assert_eq!((state.file_index, state.line_count), (0, 4));
        assert_eq!(messages_in(&engine, 0), vec!["0", "1", "2", "3"]);
        assert!(!engine.config().file_path(1).exists());
    }

    #[test]
    fn test_single_file_no_rotation() {
        let dir = TempDir::new().unwrap();
        let mut engine = engine_in(&dir, 1, 11);

        let sent: Vec<String> = (0..10).map(|i| format!("line {}", i)).collect();
        for msg in &sent {
            engine.ingest(msg);
        }

        assert_eq!(engine.state().cycle_count, 0);
        assert_eq!(messages_in(&engine, 0), sent);
    }

    #[test]
    fn test_recycled_file_holds_only_new_lines() {
        let dir = TempDir::new().unwrap();
        let mut engine = engine_in(&dir, 2, 3);

        for i in 0..9 {
            engine.ingest(&format!("m{}", i));
        }

        assert_eq!(messages_in(&engine, 0), vec!["m6", "m7", "m8"]);
        assert_eq!(messages_in(&engine, 1), vec!["m3", "m4", "m5"]);
    }

    #[test]
    fn test_multiline_message_stays_one_line() {
        let dir = TempDir::new().unwrap();
        let mut engine = engine_in(&dir, 1, 2);

        engine.ingest("x\ny");
        engine.ingest("z");

        let content = fs::read_to_string(engine.config().file_path(0)).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert_eq!(messages_in(&engine, 0), vec!["x\\ny", "z"]);
        assert_eq!(engine.state().cycle_count, 1);
    }

    #[test]
    fn test_write_failure_drops_message() {
        let dir = TempDir::new().unwrap();
        let mut engine = engine_in(&dir, 2, 2);
        fs::create_dir(engine.config().file_path(0)).unwrap();

        engine.ingest("lost");

        let state = engine.state();
        assert_eq!(state.dropped, 1);
        assert_eq!(state.line_count, 0);
    }
}
