//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty output on stderr
//! - Optional rotating JSON log file
//! - Secret scrubbing on every sink

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{LoggerImpl, LOG_FILE_NAME};
pub use secret_scrubbing::{ScrubbingMakeWriter, SecretScrubber};
