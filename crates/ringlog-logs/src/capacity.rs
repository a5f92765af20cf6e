//! Rotation bookkeeping: which slot is active and how full it is

use ringlog_core::LoggerConfig;
use serde::Serialize;

/// Mutable rotation counters owned by a single listener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RotationState {
    /// Lines written to the active file
    pub line_count: usize,
    /// Active ring slot, always in `[0, max_files)`
    pub file_index: usize,
    /// Completed passes over the whole ring
    pub cycle_count: usize,
    /// Messages lost to write failures
    pub dropped: usize,
}

impl RotationState {
    /// Total lines persisted since this state was created
    ///
    /// Saturates instead of overflowing after very many cycles.
    pub fn persisted(&self, config: &LoggerConfig) -> usize {
        self.cycle_count
            .saturating_mul(config.ring_capacity())
            .saturating_add(self.line_count + self.file_index * config.max_lines_per_file())
    }
}

/// Pure capacity arithmetic over a [`RotationState`]. Never touches the filesystem.
#[derive(Debug, Clone)]
pub struct CapacityTracker {
    max_files: usize,
    max_lines_per_file: usize,
    state: RotationState,
}

impl CapacityTracker {
    pub fn new(config: &LoggerConfig) -> Self {
        Self {
            max_files: config.max_files(),
            max_lines_per_file: config.max_lines_per_file(),
            state: RotationState::default(),
        }
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn file_is_full(&self) -> bool {
        self.state.line_count == self.max_lines_per_file
    }

    /// Move to the next slot if the active one is full. Returns true if it moved.
    pub fn advance_file_if_full(&mut self) -> bool {
        if !self.file_is_full() {
            return false;
        }
        self.state.line_count = 0;
        self.state.file_index = (self.state.file_index + 1) % self.max_files;
        true
    }

    pub fn ring_is_full(&self) -> bool {
        self.state.line_count + self.state.file_index * self.max_lines_per_file
            >= self.max_files * self.max_lines_per_file
    }

    /// Start the next cycle at slot 0
    pub fn wrap(&mut self) {
        self.state.file_index = 0;
        self.state.line_count = 0;
        self.state.cycle_count += 1;
    }

    pub fn record_line(&mut self) {
        self.state.line_count += 1;
    }

    pub fn record_drop(&mut self) {
        self.state.dropped += 1;
    }
}
