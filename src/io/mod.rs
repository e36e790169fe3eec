/// Command-line parsing and batch generation
pub mod cli;
/// Compile-time constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON file output
pub mod export;
/// Batch progress display
pub mod progress;
/// Rule-set exchange format
pub mod ruleset;
