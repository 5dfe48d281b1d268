//! # sable-queue
//!
//! The event queue protocol on top of `sable-events`.
//!
//! - **`EventQueue`**: push from any thread, poll/wait on the owner thread,
//!   bulk peep (add/peek/get), flush, has/available, per-type enable/disable
//! - **`FilterRegistry`**: one replaceable admission filter plus watches,
//!   invoked serially from whichever thread pushes
//! - **`CustomTypeAllocator`**: monotonic ranges carved from the user event range
//! - **`EventSource`**: the backend seam pumped by `poll`/`wait`
//! - **Transient data**: strings and lists referenced by event payloads,
//!   valid while the owning event is handled

#![deny(unsafe_code)]

pub mod custom;
pub mod errors;
pub mod filter;
pub mod queue;
pub mod source;
pub mod transient;

pub use custom::CustomTypeAllocator;
pub use errors::{BackendError, QueueError, Result};
pub use filter::{EventFilter, FilterRegistry, WatchId};
pub use queue::{EventQueue, PeepAction};
pub use source::{EventSource, NullSource};
pub use transient::TransientData;
