//! The external fixed-size event record and field-level marshalling.
//!
//! [`RawEvent`] is the 128-byte, 8-aligned record exchanged with backends.
//! Every record starts with the same 16-byte header:
//!
//! | offset | type  | field       |
//! |--------|-------|-------------|
//! | 0      | `u32` | event type  |
//! | 4      | `u32` | reserved    |
//! | 8      | `u64` | timestamp   |
//!
//! Category payloads follow at fixed offsets. Multi-byte values use native
//! byte order, so a record produced here can be handed byte-for-byte to a
//! native consumer of the same layout. Pointer-sized slots are 8 bytes and
//! hold [`TransientRef`](crate::TransientRef) handles instead of addresses.
//!
//! Field offsets are checked at compile time: every payload definition
//! asserts that each field is aligned and ends inside the record.

mod field;

pub use field::RawField;

use std::fmt;

use crate::errors::{CodecError, Result};

/// Size in bytes of the external event record.
pub const EVENT_SIZE: usize = 128;

/// Alignment in bytes of the external event record.
pub const EVENT_ALIGN: usize = 8;

/// Size of the common header shared by every payload.
pub const HEADER_SIZE: usize = 16;

/// Size of everything after the header.
pub const PAYLOAD_SIZE: usize = EVENT_SIZE - HEADER_SIZE;

const TYPE_OFFSET: usize = 0;
const TIMESTAMP_OFFSET: usize = 8;

/// One external event record.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C, align(8))]
pub struct RawEvent {
    bytes: [u8; EVENT_SIZE],
}

const _: () = assert!(std::mem::size_of::<RawEvent>() == EVENT_SIZE);
const _: () = assert!(std::mem::align_of::<RawEvent>() == EVENT_ALIGN);

impl Default for RawEvent {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl RawEvent {
    /// An all-zero record.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            bytes: [0; EVENT_SIZE],
        }
    }

    /// Wrap an owned byte array.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; EVENT_SIZE]) -> Self {
        Self { bytes }
    }

    /// Copy a record out of a byte slice that must be exactly [`EVENT_SIZE`] long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != EVENT_SIZE {
            return Err(CodecError::WrongLength {
                expected: EVENT_SIZE,
                actual: bytes.len(),
            });
        }
        let mut raw = Self::zeroed();
        raw.bytes.copy_from_slice(bytes);
        Ok(raw)
    }

    /// Borrow the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; EVENT_SIZE] {
        &self.bytes
    }

    /// Mutably borrow the underlying bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; EVENT_SIZE] {
        &mut self.bytes
    }

    /// Consume the record and return its bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; EVENT_SIZE] {
        self.bytes
    }

    /// The event type identifier in the header.
    #[must_use]
    pub fn event_type(&self) -> u32 {
        self.read(TYPE_OFFSET)
    }

    /// Overwrite the event type identifier.
    pub fn set_event_type(&mut self, event_type: u32) {
        self.write(TYPE_OFFSET, event_type);
    }

    /// The header timestamp in nanoseconds.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.read(TIMESTAMP_OFFSET)
    }

    /// Overwrite the header timestamp.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.write(TIMESTAMP_OFFSET, timestamp);
    }

    /// Read a field at `offset`.
    ///
    /// Panics if the field does not fit inside the record; payload
    /// definitions rule this out at compile time.
    #[must_use]
    pub fn read<T: RawField>(&self, offset: usize) -> T {
        T::read_from(self, offset)
    }

    /// Write a field at `offset`.
    pub fn write<T: RawField>(&mut self, offset: usize, value: T) {
        value.write_to(self, offset);
    }

    /// Decode this record and write it back in canonical form.
    ///
    /// Bytes not covered by the decoded variant are zeroed. Returns the
    /// decoded event.
    pub fn normalize(&mut self) -> crate::Event {
        let event = crate::Event::decode(self);
        event.encode_into(self);
        event
    }

    pub(crate) fn bytes_at<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut out = [0; N];
        out.copy_from_slice(&self.bytes[offset..offset + N]);
        out
    }

    pub(crate) fn put_bytes<const N: usize>(&mut self, offset: usize, value: [u8; N]) {
        self.bytes[offset..offset + N].copy_from_slice(&value);
    }
}

/// The uninterpreted bytes after the header, for records no payload claims.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawPayload([u8; PAYLOAD_SIZE]);

impl Default for RawPayload {
    fn default() -> Self {
        Self([0; PAYLOAD_SIZE])
    }
}

impl RawPayload {
    /// Wrap payload bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; PAYLOAD_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the payload bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PAYLOAD_SIZE] {
        &self.0
    }

    /// Mutably borrow the payload bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; PAYLOAD_SIZE] {
        &mut self.0
    }

    /// Whether every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

/// Hex dump up to the last non-zero byte.
impl fmt::Display for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = self.0.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
        for byte in &self.0[..used] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawPayload({self})")
    }
}

impl fmt::Debug for RawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawEvent")
            .field("event_type", &format_args!("{:#06x}", self.event_type()))
            .field("timestamp", &self.timestamp())
            .finish_non_exhaustive()
    }
}

impl From<[u8; EVENT_SIZE]> for RawEvent {
    fn from(bytes: [u8; EVENT_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for RawEvent {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

impl AsRef<[u8]> for RawEvent {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
