//! Error types for the slideshow plugin.
//!
//! This module defines the centralized error type [`SlideshowError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for slideshow operations.
///
/// Configuration problems are fatal at initialization: a slideshow is either
/// fully constructed or not constructed at all. Everything after construction
/// is a guarded no-op except for explicitly invalid arguments.
///
/// # Examples
///
/// ```
/// use zslideshow::SlideshowError;
///
/// fn validate_design(name: &str) -> Result<(), SlideshowError> {
///     Err(SlideshowError::Configuration(format!("unknown slider design `{name}`")))
/// }
///
/// assert!(validate_design("carousel3d").is_err());
/// ```
#[derive(Debug, Error)]
pub enum SlideshowError {
    /// Configuration is invalid or yields no slides.
    ///
    /// Raised when the slider design is unrecognized, when no slides remain
    /// after materialization, or when a configuration value cannot be parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An operation received an argument outside its contract.
    ///
    /// Examples are a shift direction other than `+1`/`-1`, a jump target past
    /// the last slide, or a non-positive host width.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. while reading a
    /// configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for slideshow operations.
pub type Result<T> = std::result::Result<T, SlideshowError>;
