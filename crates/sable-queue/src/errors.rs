//! Queue error types.

use sable_events::CodecError;
use thiserror::Error;

/// A failure reported by the platform backend, carrying its diagnostic text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct BackendError {
    /// Native diagnostic message.
    pub message: String,
}

impl BackendError {
    /// Wrap a backend diagnostic.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by queue operations.
///
/// Empty queues, rejected events and exhausted custom type ranges are not
/// errors; they are reported through `Option`/`bool` results.
#[derive(Debug, Error)]
pub enum QueueError {
    /// The queue already holds its configured maximum number of events.
    #[error("event queue is full ({capacity} events)")]
    QueueFull {
        /// Configured capacity.
        capacity: usize,
    },
    /// The backend failed while pumping events.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    /// An owner-thread operation was called from another thread.
    #[error("{operation} must be called on the thread that created the queue")]
    WrongThread {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// A byte buffer could not be read as an event record.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
