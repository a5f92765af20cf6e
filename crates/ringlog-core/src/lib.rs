//! ringlog Core - Shared configuration, values, and error handling

pub mod config;
pub mod constants;
pub mod error;
pub mod value;

pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
pub use value::{stringify, LogValue};
