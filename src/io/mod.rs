//! Input/output, configuration and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Batch progress display
pub mod progress;
/// Plain-text grid dump
pub mod text;
