//! Error model.
//!
//! A single [`Error`] enum covers every failure this crate can surface,
//! split/combine included. Nothing in this crate panics on bad input or
//! environmental failure; `?` propagates an `Error` instead.

use thiserror::Error as ThisError;

/// Errors produced by field construction, secret splitting, and secret
/// reconstruction.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A caller-supplied parameter (threshold, share count, degree, ...)
    /// is out of range or otherwise malformed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// A share failed to parse, or carries metadata inconsistent with the
    /// combine call it was passed to (wrong field degree, threshold byte
    /// greater than the caller-specified threshold, ...).
    #[error("invalid share: {0}")]
    InvalidShare(String),

    /// Gaussian elimination could not find a nonzero pivot: the supplied
    /// shares are linearly dependent, most commonly because the same
    /// share was supplied more than once.
    #[error("shares inconsistent; perhaps a single share was used twice")]
    LinearDependence,

    /// Reading or writing share material failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required system resource (entropy source, memory lock, ...) was
    /// unavailable.
    #[error("resource error: {0}")]
    Resource(&'static str),
}
