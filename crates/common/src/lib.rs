//! Common types and utilities shared across all crates

pub mod config;
pub mod error;
pub mod tracing_setup;
pub mod types;

pub use config::*;
pub use error::{ExposureError, Result};
pub use tracing_setup::init_tracing_with_level;
pub use types::*;
