//! Error types for kanji-drill.
//!
//! Each module owns a focused `thiserror` enum; [`AppError`] wraps them all so
//! the binary can compose everything with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned by the CLI pipeline
//!   - [`ConfigError`] - TOML config file could not be read or parsed
//!   - [`SettingsError`] - resolved settings violate a domain bound
//!   - [`StoreError`] - persisted settings document failed to load, migrate or save
//!   - [`DatasetError`] - external kanji table failed to load or validate
//!   - [`GenerateError`] - no question candidates for the requested grade/mode
//!   - [`LoggingError`] - log file subscriber could not be installed
//!   - `std::io::Error` - writing the rendered worksheet failed
//!
//! The layout engine has no error type: every fitting operation is total and
//! clamps degenerate results to a floor instead of failing.

use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::generator::GenerateError;
use crate::logging::LoggingError;
use crate::settings::store::StoreError;
use crate::settings::SettingsError;
use thiserror::Error;

/// Top-level application error.
///
/// All variants are fatal for a CLI invocation: the error is printed and the
/// process exits non-zero. Nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Settings rejected at the validation boundary (cell size, page count,
    /// practice columns, title).
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Settings store error: {0}")]
    Store(#[from] StoreError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// The grade/mode combination has no usable data, e.g. a grade without
    /// any antonym pairs.
    #[error("Question generation failed: {0}")]
    Generate(#[from] GenerateError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    #[error("Failed to serialize worksheet: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
