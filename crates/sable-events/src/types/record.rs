//! Record-level helpers on [`Event`]: byte-buffer codec entry points, header
//! access and descriptions.

use std::fmt;

use sable_core::WindowId;

use super::event_type::{Event, EventType, is_user_event};
use super::group::EventGroup;
use super::payloads::UnknownEvent;
use crate::codec::{EVENT_SIZE, RawEvent};
use crate::errors::{CodecError, Result};
use crate::transient::TransientRef;

impl Event {
    /// Encode into a fresh external record.
    #[must_use]
    pub fn encode(&self) -> RawEvent {
        let mut raw = RawEvent::zeroed();
        self.encode_into(&mut raw);
        raw
    }

    /// Decode from a byte buffer that must be exactly one record long.
    pub fn decode_bytes(bytes: &[u8]) -> Result<Self> {
        RawEvent::try_from_slice(bytes).map(|raw| Self::decode(&raw))
    }

    /// Encode into a caller-supplied byte buffer of exactly one record.
    pub fn encode_to_slice(&self, out: &mut [u8]) -> Result<()> {
        if out.len() != EVENT_SIZE {
            return Err(CodecError::WrongLength {
                expected: EVENT_SIZE,
                actual: out.len(),
            });
        }
        out.copy_from_slice(self.encode().as_bytes());
        Ok(())
    }

    /// Header timestamp in nanoseconds.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.fields().timestamp()
    }

    /// Overwrite the header timestamp.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.fields_mut().set_timestamp(timestamp);
    }

    /// The window the event refers to, if the payload carries a non-zero one.
    #[must_use]
    pub fn window_id(&self) -> Option<WindowId> {
        self.fields().window_id()
    }

    /// The most specific group of the record's identifier.
    #[must_use]
    pub fn group(&self) -> Option<EventGroup> {
        EventGroup::of(self.raw_type())
    }

    /// Non-null transient handles held by the payload.
    #[must_use]
    pub fn transient_refs(&self) -> Vec<TransientRef> {
        let mut out = Vec::new();
        self.fields().transient_refs(&mut out);
        out
    }

    /// Whether this is an application-defined event.
    #[must_use]
    pub const fn is_user(&self) -> bool {
        is_user_event(self.raw_type())
    }

    /// Whether the record has the listed type `event_type`.
    #[must_use]
    pub const fn is(&self, event_type: EventType) -> bool {
        self.raw_type() == event_type.raw()
    }
}

impl Default for Event {
    /// The decoding of an all-zero record.
    fn default() -> Self {
        Self::Unknown(UnknownEvent::default())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        self.fields().fmt_fields(f)
    }
}

impl From<&RawEvent> for Event {
    fn from(raw: &RawEvent) -> Self {
        Self::decode(raw)
    }
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        Self::decode(&raw)
    }
}

impl From<&Event> for RawEvent {
    fn from(event: &Event) -> Self {
        event.encode()
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        event.encode()
    }
}
