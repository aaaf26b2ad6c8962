//! Boolean-ish flags stored inconsistently across legacy rows.

use serde::{Deserialize, Serialize};

use crate::constants::{ASCII_WS, TRUTHY_STRINGS};

/// A flag value exactly as stored: native boolean, integer, real, or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

/// The one place a stored flag is interpreted.
///
/// Truthy: native `true`, the integer `1`, or (case-insensitively, trimmed)
/// one of `"1"`, `"true"`, `"yes"`, `"y"`, `"on"`. Everything else, including
/// NULL, is false. The SQL compiler in the storage adapter emits the same rule
/// from [`TRUTHY_STRINGS`].
pub fn normalize_boolean(value: Option<&FlagValue>) -> bool {
    match value {
        None => false,
        Some(FlagValue::Bool(b)) => *b,
        Some(FlagValue::Integer(i)) => *i == 1,
        Some(FlagValue::Real(f)) => *f == 1.0,
        Some(FlagValue::Text(s)) => {
            let lowered = s.trim_matches(ASCII_WS).to_ascii_lowercase();
            TRUTHY_STRINGS.contains(&lowered.as_str())
        }
    }
}
