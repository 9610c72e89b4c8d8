//! Logging setup.
//!
//! The library only emits through the `log` facade (`debug!` on pause/resume,
//! `trace!` on tick boundaries). Binaries call `init_logging` once to install
//! an `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
