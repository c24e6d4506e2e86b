//! Input/output operations, configuration, and error handling

/// Command-line interface for the island shell
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Reveal progress display
pub mod progress;
