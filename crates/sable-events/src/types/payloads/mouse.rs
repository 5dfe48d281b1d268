//! Mouse payloads.

use sable_core::{MouseButton, MouseButtonFlags, MouseId, MouseWheelDirection, WindowId};

define_payload! {
    /// Mouse connected or disconnected.
    pub struct MouseDeviceEvent {
        /// Mouse instance.
        pub which: MouseId = 16,
    }
}

define_payload! {
    /// Mouse moved.
    pub struct MouseMotionEvent {
        /// Window with mouse focus.
        pub window_id: WindowId = 16,
        /// Mouse instance, [`MouseId::TOUCH`] for synthesized events.
        pub which: MouseId = 20,
        /// Buttons held during the motion.
        pub state: MouseButtonFlags = 24,
        /// Position relative to the window.
        pub x: f32 = 28,
        /// Position relative to the window.
        pub y: f32 = 32,
        /// Relative motion.
        pub xrel: f32 = 36,
        /// Relative motion.
        pub yrel: f32 = 40,
    }
    window = window_id;
}

define_payload! {
    /// Mouse button pressed or released.
    pub struct MouseButtonEvent {
        /// Window with mouse focus.
        pub window_id: WindowId = 16,
        /// Mouse instance.
        pub which: MouseId = 20,
        /// Button index.
        pub button: MouseButton = 24,
        /// Pressed (`true`) or released.
        pub down: bool = 25,
        /// 1 for single click, 2 for double click, ...
        pub clicks: u8 = 26,
        /// Position relative to the window.
        pub x: f32 = 28,
        /// Position relative to the window.
        pub y: f32 = 32,
    }
    window = window_id;
}

define_payload! {
    /// Mouse wheel scrolled.
    pub struct MouseWheelEvent {
        /// Window with mouse focus.
        pub window_id: WindowId = 16,
        /// Mouse instance.
        pub which: MouseId = 20,
        /// Horizontal scroll amount, positive to the right.
        pub x: f32 = 24,
        /// Vertical scroll amount, positive away from the user.
        pub y: f32 = 28,
        /// Whether the amounts are inverted.
        pub direction: MouseWheelDirection = 32,
        /// Pointer position relative to the window.
        pub mouse_x: f32 = 36,
        /// Pointer position relative to the window.
        pub mouse_y: f32 = 40,
    }
    window = window_id;
}
