//! The backend seam: where platform events come from.

use crate::errors::BackendError;
use crate::queue::EventQueue;

/// A producer of platform events.
///
/// `pump` is called on the queue's owner thread, either explicitly through
/// [`EventQueue::pump_events`] or implicitly by `poll`/`wait` when the queue
/// is empty. Implementations push whatever the platform has pending and
/// return without blocking.
pub trait EventSource: Send {
    /// Move pending platform events into `queue`.
    fn pump(&mut self, queue: &EventQueue) -> Result<(), BackendError>;
}

/// A source that never produces anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSource;

impl EventSource for NullSource {
    fn pump(&mut self, _queue: &EventQueue) -> Result<(), BackendError> {
        Ok(())
    }
}

impl<F> EventSource for F
where
    F: FnMut(&EventQueue) -> Result<(), BackendError> + Send,
{
    fn pump(&mut self, queue: &EventQueue) -> Result<(), BackendError> {
        self(queue)
    }
}
