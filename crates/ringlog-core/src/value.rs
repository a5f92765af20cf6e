//! Loggable values and their canonical text form

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A value that can be handed to the logger
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    /// Key-value pairs, rendered with keys in sorted order
    Map(BTreeMap<String, String>),
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Text(s) => f.write_str(s),
            LogValue::Int(n) => write!(f, "{}", n),
            LogValue::UInt(n) => write!(f, "{}", n),
            LogValue::Float(n) => write!(f, "{}", n),
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Bytes(bytes) => {
                f.write_str("[")?;
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", byte)?;
                }
                f.write_str("]")
            }
            LogValue::Map(map) => {
                f.write_str("map[")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", k, v)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Convert a value into the text that ends up in the log line
pub fn stringify(value: impl Into<LogValue>) -> String {
    let value: LogValue = value.into();
    value.to_string()
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::Text(s.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue {
            fn from(n: $t) -> Self {
                LogValue::Int(i64::from(n))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue {
            fn from(n: $t) -> Self {
                LogValue::UInt(u64::from(n))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for LogValue {
    fn from(n: usize) -> Self {
        LogValue::UInt(n as u64)
    }
}

impl From<f32> for LogValue {
    fn from(n: f32) -> Self {
        LogValue::Float(f64::from(n))
    }
}

impl From<f64> for LogValue {
    fn from(n: f64) -> Self {
        LogValue::Float(n)
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<Vec<u8>> for LogValue {
    fn from(bytes: Vec<u8>) -> Self {
        LogValue::Bytes(bytes)
    }
}

impl From<&[u8]> for LogValue {
    fn from(bytes: &[u8]) -> Self {
        LogValue::Bytes(bytes.to_vec())
    }
}

impl From<BTreeMap<String, String>> for LogValue {
    fn from(map: BTreeMap<String, String>) -> Self {
        LogValue::Map(map)
    }
}

impl From<HashMap<String, String>> for LogValue {
    fn from(map: HashMap<String, String>) -> Self {
        LogValue::Map(map.into_iter().collect())
    }
}
