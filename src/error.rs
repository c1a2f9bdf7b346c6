//! Crate-level error types.
//!
//! [`HeliCatError`] unifies every error source (configuration, terminal
//! I/O) behind a single enum so callers can match on the variant they care
//! about while still using the `?` operator for easy propagation. The
//! animation core itself is infallible: candle generation and path
//! projection cannot fail for valid positive-price input.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeliCatError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum HeliCatError {
    /// A configuration value was malformed or out of range.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup, teardown, or drawing failed.
    #[error("terminal I/O error: {0}")]
    Io(String),
}
