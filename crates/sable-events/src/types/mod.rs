//! Event type definitions.
//!
//! - [`EventType`]: 110-variant enum of every listed event identifier.
//! - [`Event`]: Tagged record over all payloads plus `User`, `Padding` and `Unknown`.
//! - [`EventGroup`] / [`EventRange`]: Category ranges for group operations.
//! - [`payloads`]: Payload structs with fixed offsets in the external record.

// `macros` must come first so the `define_events!` macro is available to
// subsequent modules.
#[macro_use]
mod macros;

pub mod event_type;
pub mod group;
pub mod payloads;
mod record;

pub use event_type::{
    ALL_EVENT_TYPES, Event, EventType, LAST_EVENT, PADDING_EVENT, USER_EVENT_FIRST, is_user_event,
};
pub use group::{ALL_GROUPS, EventGroup, EventRange};
