/// Command-line parsing and command execution
pub mod cli;
/// Defaults and output settings
pub mod configuration;
/// Error types
pub mod error;
/// PNG import and export
pub mod image;
/// Progress display
pub mod progress;
