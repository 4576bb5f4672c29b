//! Utility modules for buckify

pub mod logging;

pub use logging::{init_logging, LoggingConfig};
