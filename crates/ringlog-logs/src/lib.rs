//! ringlog Logs - Bounded rotating log writer
//!
//! Messages are written as `[<timestamp>] <message>` lines into a fixed ring
//! of files named `<prefix>_<index>.txt`. Once every file is full the ring
//! wraps and the oldest file is overwritten.

mod capacity;
mod engine;
mod listener;
mod trial;
mod writer;

pub use capacity::{CapacityTracker, RotationState};
pub use engine::RotationEngine;
pub use listener::{LogSender, RotatingLogger, ShutdownHandle};
pub use trial::{run_trial, TrialMessages, RANDOM_MESSAGES};
pub use writer::{render, FileWriter};
