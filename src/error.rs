//! Errors reported by the transform engine and the domain conversions.

use thiserror::Error;

/// Errors that may occur.
///
/// Every variant is a precondition failure of the single requested
/// computation; there is no partial result and no recovery path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NttError {
    /// A domain-conversion precondition was violated.
    #[error("{domain} precondition violated: value {value} is not below {bound}")]
    OutOfRange {
        /// Which conversion or constructor rejected the value.
        domain: &'static str,
        /// The offending value.
        value: u128,
        /// The exclusive upper bound the value had to satisfy.
        bound: u128,
    },
    /// A coefficient vector did not have the transform length.
    #[error("coefficient vector has length {len}, expected {expected}")]
    InvalidLength {
        /// The length that was passed in.
        len: usize,
        /// The length the transform requires.
        expected: usize,
    },
}
