//! Logging setup: `tracing` with an `EnvFilter` read from `CATALOG_LOG`.

pub mod setup;

pub use setup::init_tracing;
