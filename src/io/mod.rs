//! Command-line surface, configuration, errors and file I/O

/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and configuration defaults
pub mod configuration;
/// Error type and helpers
pub mod error;
/// JPEG decoding and encoding
pub mod image;
/// Logger setup
pub mod logging;
/// Progress bar display
pub mod progress;
