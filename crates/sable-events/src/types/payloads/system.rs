//! Header-only, clipboard, drag-and-drop, user, padding and unknown payloads.

use sable_core::WindowId;

use crate::codec::RawPayload;
use crate::transient::TransientRef;

define_payload! {
    /// Events that carry nothing beyond the common header
    /// (application lifecycle, keymap changes, reserved and internal events).
    pub struct CommonEvent {}
}

define_payload! {
    /// Clipboard contents or ownership changed.
    pub struct ClipboardEvent {
        /// Whether this process owns the clipboard.
        pub owner: bool = 16,
        /// Number of entries behind `mime_types`.
        pub num_mime_types: i32 = 20,
        /// List of MIME types now on offer.
        pub mime_types: TransientRef = 24,
    }
}

define_payload! {
    /// Drag-and-drop progress or payload.
    pub struct DropEvent {
        /// Window that received the drop.
        pub window_id: WindowId = 16,
        /// Drop position, relative to the window.
        pub x: f32 = 20,
        /// Drop position, relative to the window.
        pub y: f32 = 24,
        /// Source application, if known.
        pub source: TransientRef = 32,
        /// Dropped file name or text.
        pub data: TransientRef = 40,
    }
    window = window_id;
}

define_payload! {
    /// Application-defined event, type allocated from the user range.
    ///
    /// `data1` and `data2` are opaque words; the core never interprets them.
    pub struct UserEvent {
        /// Allocated event type.
        pub event_type: u32 = 0,
        /// Associated window, if any.
        pub window_id: WindowId = 16,
        /// Application-defined code.
        pub code: i32 = 20,
        /// Application-defined word.
        pub data1: u64 = 24,
        /// Application-defined word.
        pub data2: u64 = 32,
    }
    window = window_id;
}

define_payload! {
    /// An identifier no known variant claims. The bytes after the header are
    /// kept as they were so the record re-encodes unchanged.
    pub struct UnknownEvent {
        /// The unrecognised identifier.
        pub event_type: u32 = 0,
        /// Everything after the header.
        pub payload: RawPayload = 16,
    }
}

define_payload! {
    /// Out-of-band padding record, kept byte for byte.
    pub struct PaddingEvent {
        /// Everything after the header.
        pub payload: RawPayload = 16,
    }
}
