//! Error types for the event codec.

use thiserror::Error;

/// Errors raised when converting between byte buffers and event records.
///
/// Decoding a well-sized record never fails: unrecognised identifiers become
/// [`Event::Unknown`](crate::Event::Unknown). Only buffer size mismatches are
/// reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer is not exactly one external record long.
    #[error("expected a {expected}-byte event record, got {actual} bytes")]
    WrongLength {
        /// Size of the external record.
        expected: usize,
        /// Size of the buffer that was supplied.
        actual: usize,
    },
}

/// Convenience type alias for codec results.
pub type Result<T> = std::result::Result<T, CodecError>;
