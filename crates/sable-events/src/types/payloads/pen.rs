//! Touch and pen payloads.

use sable_core::{FingerId, PenAxis, PenId, PenInputFlags, TouchId, WindowId};

define_payload! {
    /// Finger touched, moved, lifted or was cancelled.
    pub struct TouchFingerEvent {
        /// Touch device.
        pub touch_id: TouchId = 16,
        /// Finger on the device.
        pub finger_id: FingerId = 24,
        /// Normalized position, `0.0..=1.0`.
        pub x: f32 = 32,
        /// Normalized position, `0.0..=1.0`.
        pub y: f32 = 36,
        /// Normalized motion.
        pub dx: f32 = 40,
        /// Normalized motion.
        pub dy: f32 = 44,
        /// Normalized pressure.
        pub pressure: f32 = 48,
        /// Window under the finger, if any.
        pub window_id: WindowId = 52,
    }
    window = window_id;
}

define_payload! {
    /// Pen came into or left proximity.
    pub struct PenProximityEvent {
        /// Window with pen focus.
        pub window_id: WindowId = 16,
        /// Pen instance.
        pub which: PenId = 20,
    }
    window = window_id;
}

define_payload! {
    /// Pen moved.
    pub struct PenMotionEvent {
        /// Window with pen focus.
        pub window_id: WindowId = 16,
        /// Pen instance.
        pub which: PenId = 20,
        /// Pen state.
        pub pen_state: PenInputFlags = 24,
        /// Position relative to the window.
        pub x: f32 = 28,
        /// Position relative to the window.
        pub y: f32 = 32,
    }
    window = window_id;
}

define_payload! {
    /// Pen tip touched or left the surface.
    pub struct PenTouchEvent {
        /// Window with pen focus.
        pub window_id: WindowId = 16,
        /// Pen instance.
        pub which: PenId = 20,
        /// Pen state.
        pub pen_state: PenInputFlags = 24,
        /// Position relative to the window.
        pub x: f32 = 28,
        /// Position relative to the window.
        pub y: f32 = 32,
        /// Whether the eraser end is in use.
        pub eraser: bool = 36,
        /// Touching (`true`) or lifted.
        pub down: bool = 37,
    }
    window = window_id;
}

define_payload! {
    /// Pen barrel button pressed or released.
    pub struct PenButtonEvent {
        /// Window with pen focus.
        pub window_id: WindowId = 16,
        /// Pen instance.
        pub which: PenId = 20,
        /// Pen state.
        pub pen_state: PenInputFlags = 24,
        /// Position relative to the window.
        pub x: f32 = 28,
        /// Position relative to the window.
        pub y: f32 = 32,
        /// Button index, starting at 1.
        pub button: u8 = 36,
        /// Pressed (`true`) or released.
        pub down: bool = 37,
    }
    window = window_id;
}

define_payload! {
    /// Pen axis value changed.
    pub struct PenAxisEvent {
        /// Window with pen focus.
        pub window_id: WindowId = 16,
        /// Pen instance.
        pub which: PenId = 20,
        /// Pen state.
        pub pen_state: PenInputFlags = 24,
        /// Position relative to the window.
        pub x: f32 = 28,
        /// Position relative to the window.
        pub y: f32 = 32,
        /// Axis that changed.
        pub axis: PenAxis = 36,
        /// New axis value.
        pub value: f32 = 40,
    }
    window = window_id;
}
