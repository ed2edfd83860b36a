//! Error types for the Truth Lens plugin.
//!
//! This module defines the centralized error type [`TruthLensError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors are terminal to the operation that raised them, never to the session:
//! the event handler reports them inline (input screen) or as an error state
//! (result screen) and leaves application state as it was before the operation.

use thiserror::Error;

/// The main error type for Truth Lens plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution. The first three variants form the user-facing taxonomy: draft
/// validation, analysis-service failures, and attachment resource problems.
/// The remaining variants cover plugin infrastructure (I/O, themes, worker
/// IPC, configuration).
///
/// # Examples
///
/// ```
/// use truthlens::domain::TruthLensError;
///
/// fn check_draft(url: &str) -> Result<(), TruthLensError> {
///     if url.trim().is_empty() {
///         return Err(TruthLensError::Validation("Paste a URL first".to_string()));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum TruthLensError {
    /// The submitted draft is empty or malformed.
    ///
    /// Reported inline on the input screen; no analysis is attempted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The external analysis call failed.
    ///
    /// Covers network failures, timeouts, and malformed responses from the
    /// analysis service. Surfaced on the result screen with a retry
    /// affordance; any previously stored result is left untouched.
    #[error("Analysis service error: {0}")]
    AnalysisService(String),

    /// An image attachment could not be read or recognized.
    ///
    /// Reported inline on the input screen; the rest of the draft is
    /// unaffected.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when the plugin cannot reach its analysis worker thread or
    /// cannot decode a worker message. The string contains details about the
    /// communication failure.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Truth Lens operations.
///
/// This is a type alias for `std::result::Result<T, TruthLensError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TruthLensError>;
