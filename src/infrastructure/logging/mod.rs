//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON output on stderr
//! - Optional daily-rotated JSON log files

pub mod logger;

pub use logger::{LogFormat, LoggerImpl};
