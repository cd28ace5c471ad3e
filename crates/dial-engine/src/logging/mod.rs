//! Logging utilities.
//!
//! Centralizes logger initialization on top of the `log` facade, with
//! `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
