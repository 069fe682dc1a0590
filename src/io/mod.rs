//! Input/output operations: CLI, settings, dataset loading, progress
//! display, reporting, and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime settings, defaults, and the settings file
pub mod configuration;
/// CSV dataset loading and seeded sampling
pub mod dataset;
/// Error types for the I/O boundary
pub mod error;
/// Progress display implementations
pub mod progress;
/// Results report rendering and run statistics
pub mod report;
