//! # sable-events
//!
//! Event record and binary codec for the sable event core.
//!
//! - **Event table**: 110 listed identifiers, each bound to one payload struct
//! - **Event record**: `Event` tagged enum with exhaustive matching and an `Unknown` fallback
//! - **Codec**: `Event::decode` / `Event::encode` against the 128-byte, 8-aligned `RawEvent`
//! - **Groups**: contiguous identifier ranges per category for bulk operations
//! - **Transient references**: handles standing in for producer-owned strings and lists

#![deny(unsafe_code)]

pub mod codec;
pub mod errors;
pub mod transient;
pub mod types;

pub use codec::{EVENT_ALIGN, EVENT_SIZE, HEADER_SIZE, PAYLOAD_SIZE, RawEvent, RawField, RawPayload};
pub use errors::{CodecError, Result};
pub use transient::TransientRef;
pub use types::payloads;
pub use types::payloads::{FieldLayout, Payload, PayloadFields};
pub use types::{
    ALL_EVENT_TYPES, ALL_GROUPS, Event, EventGroup, EventRange, EventType, LAST_EVENT,
    PADDING_EVENT, USER_EVENT_FIRST, is_user_event,
};
