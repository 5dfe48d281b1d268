//! Keyboard and text input payloads.

use sable_core::{KeyboardId, Keycode, Keymod, Scancode, WindowId};

use crate::transient::TransientRef;

define_payload! {
    /// Keyboard connected or disconnected.
    pub struct KeyboardDeviceEvent {
        /// Keyboard instance.
        pub which: KeyboardId = 16,
    }
}

define_payload! {
    /// Key pressed or released.
    pub struct KeyboardEvent {
        /// Window with keyboard focus.
        pub window_id: WindowId = 16,
        /// Keyboard instance, `0` if unknown or virtual.
        pub which: KeyboardId = 20,
        /// Physical key.
        pub scancode: Scancode = 24,
        /// Virtual key.
        pub key: Keycode = 28,
        /// Modifier state.
        pub modifiers: Keymod = 32,
        /// Platform-dependent raw scancode.
        pub raw: u16 = 34,
        /// Pressed (`true`) or released.
        pub down: bool = 36,
        /// Whether this is a key repeat.
        pub repeat: bool = 37,
    }
    window = window_id;
}

define_payload! {
    /// In-progress composition text.
    pub struct TextEditingEvent {
        /// Window with keyboard focus.
        pub window_id: WindowId = 16,
        /// Composition text.
        pub text: TransientRef = 24,
        /// Cursor start, `-1` if unset.
        pub start: i32 = 32,
        /// Selection length, `-1` if unset.
        pub length: i32 = 36,
    }
    window = window_id;
}

define_payload! {
    /// Candidate list for the current composition.
    pub struct TextEditingCandidatesEvent {
        /// Window with keyboard focus.
        pub window_id: WindowId = 16,
        /// List of candidate strings.
        pub candidates: TransientRef = 24,
        /// Number of candidates.
        pub num_candidates: i32 = 32,
        /// Index of the selected candidate, `-1` if none.
        pub selected_candidate: i32 = 36,
        /// Whether the candidate list is laid out horizontally.
        pub horizontal: bool = 40,
    }
    window = window_id;
}

define_payload! {
    /// Committed text input.
    pub struct TextInputEvent {
        /// Window with keyboard focus.
        pub window_id: WindowId = 16,
        /// Input text, UTF-8.
        pub text: TransientRef = 24,
    }
    window = window_id;
}
