//! Query modules. Each function takes a `&Connection` and is called through
//! the engine's reader/writer closures.

pub mod categories;
pub mod content;
mod values;
