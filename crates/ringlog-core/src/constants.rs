//! Constants and default values for ringlog

/// Default number of files in the rotation ring
pub const DEFAULT_MAX_FILES: usize = 8;

/// Default number of lines a single file holds before rotating
pub const DEFAULT_MAX_LINES_PER_FILE: usize = 512;

/// Default prefix for output files
pub const DEFAULT_FILE_PREFIX: &str = "log_output";

/// Extension appended to every output file
pub const LOG_FILE_EXTENSION: &str = "txt";

/// Capacity of the ingestion queue between producers and the listener
pub const COMMAND_QUEUE_CAPACITY: usize = 1;

/// Config file names to search for (in priority order)
pub const CONFIG_FILES: &[&str] = &[
    "ringlog.toml",
    "ringlog.yaml",
    "ringlog.yml",
    "ringlog.json",
];

/// Get the output file name for a ring slot
pub fn log_file_name(prefix: &str, index: usize) -> String {
    format!("{}_{}.{}", prefix, index, LOG_FILE_EXTENSION)
}
