//! Input value types carried inside event payloads.
//!
//! Open-ended code spaces (scancodes, keycodes, buttons, axes) are transparent
//! newtypes with named constants so that values a backend invents later still
//! survive a decode/encode round trip. Bit sets use `bitflags` and are decoded
//! with `from_bits_retain`. Small code sets (power state, wheel direction,
//! orientation) are newtypes too, so unlisted values are carried unchanged.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! code_newtype {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) {
            $( $(#[$cmeta:meta])* $cname:ident = $cval:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $( $(#[$cmeta])* pub const $cname: Self = Self($cval); )*

            /// Raw value as stored in the external record.
            #[must_use]
            pub const fn raw(self) -> $repr {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

code_newtype! {
    /// Physical key location, independent of keyboard layout.
    Scancode(u32) {
        /// Unknown key.
        UNKNOWN = 0,
        /// `A` key.
        A = 4,
        /// Return / Enter.
        RETURN = 40,
        /// Escape.
        ESCAPE = 41,
        /// Backspace.
        BACKSPACE = 42,
        /// Tab.
        TAB = 43,
        /// Space bar.
        SPACE = 44,
    }
}

code_newtype! {
    /// Virtual key code produced by the current keyboard layout.
    Keycode(u32) {
        /// Unknown key.
        UNKNOWN = 0,
        /// Return / Enter.
        RETURN = 0x0D,
        /// Escape.
        ESCAPE = 0x1B,
        /// Backspace.
        BACKSPACE = 0x08,
        /// Tab.
        TAB = 0x09,
        /// Space bar.
        SPACE = 0x20,
        /// Lowercase `a`.
        A = 0x61,
    }
}

code_newtype! {
    /// Mouse button index.
    MouseButton(u8) {
        /// Left button.
        LEFT = 1,
        /// Middle button.
        MIDDLE = 2,
        /// Right button.
        RIGHT = 3,
        /// First extended button.
        X1 = 4,
        /// Second extended button.
        X2 = 5,
    }
}

code_newtype! {
    /// Gamepad axis index.
    GamepadAxis(u8) {
        /// Left stick, horizontal.
        LEFT_X = 0,
        /// Left stick, vertical.
        LEFT_Y = 1,
        /// Right stick, horizontal.
        RIGHT_X = 2,
        /// Right stick, vertical.
        RIGHT_Y = 3,
        /// Left trigger.
        LEFT_TRIGGER = 4,
        /// Right trigger.
        RIGHT_TRIGGER = 5,
    }
}

code_newtype! {
    /// Gamepad button index (positional naming).
    GamepadButton(u8) {
        /// Bottom face button.
        SOUTH = 0,
        /// Right face button.
        EAST = 1,
        /// Left face button.
        WEST = 2,
        /// Top face button.
        NORTH = 3,
        /// Back / select.
        BACK = 4,
        /// Guide / home.
        GUIDE = 5,
        /// Start.
        START = 6,
        /// Left stick click.
        LEFT_STICK = 7,
        /// Right stick click.
        RIGHT_STICK = 8,
        /// Left shoulder.
        LEFT_SHOULDER = 9,
        /// Right shoulder.
        RIGHT_SHOULDER = 10,
        /// D-pad up.
        DPAD_UP = 11,
        /// D-pad down.
        DPAD_DOWN = 12,
        /// D-pad left.
        DPAD_LEFT = 13,
        /// D-pad right.
        DPAD_RIGHT = 14,
        /// Extra button (share/capture/mic).
        MISC1 = 15,
        /// Touchpad click.
        TOUCHPAD = 20,
    }
}

code_newtype! {
    /// Pen axis index.
    PenAxis(u32) {
        /// Pressure, `0.0..=1.0`.
        PRESSURE = 0,
        /// Horizontal tilt in degrees.
        XTILT = 1,
        /// Vertical tilt in degrees.
        YTILT = 2,
        /// Distance from the surface.
        DISTANCE = 3,
        /// Barrel rotation in degrees.
        ROTATION = 4,
        /// Slider position.
        SLIDER = 5,
        /// Tangential (barrel) pressure.
        TANGENTIAL_PRESSURE = 6,
    }
}

bitflags! {
    /// Mouse buttons held during a motion event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MouseButtonFlags: u32 {
        /// Left button held.
        const LEFT = 1 << 0;
        /// Middle button held.
        const MIDDLE = 1 << 1;
        /// Right button held.
        const RIGHT = 1 << 2;
        /// First extended button held.
        const X1 = 1 << 3;
        /// Second extended button held.
        const X2 = 1 << 4;
    }
}

impl MouseButton {
    /// The bit this button occupies in [`MouseButtonFlags`].
    #[must_use]
    pub fn mask(self) -> MouseButtonFlags {
        match self.0 {
            1..=32 => MouseButtonFlags::from_bits_retain(1 << (self.0 - 1)),
            _ => MouseButtonFlags::empty(),
        }
    }
}

bitflags! {
    /// Keyboard modifier state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Keymod: u16 {
        /// Left shift.
        const LSHIFT = 0x0001;
        /// Right shift.
        const RSHIFT = 0x0002;
        /// Level 5 shift.
        const LEVEL5 = 0x0004;
        /// Left control.
        const LCTRL = 0x0040;
        /// Right control.
        const RCTRL = 0x0080;
        /// Left alt.
        const LALT = 0x0100;
        /// Right alt.
        const RALT = 0x0200;
        /// Left GUI (windows/command).
        const LGUI = 0x0400;
        /// Right GUI.
        const RGUI = 0x0800;
        /// Num lock.
        const NUM = 0x1000;
        /// Caps lock.
        const CAPS = 0x2000;
        /// Alt-gr.
        const MODE = 0x4000;
        /// Scroll lock.
        const SCROLL = 0x8000;
        /// Either control key.
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        /// Either shift key.
        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        /// Either alt key.
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        /// Either GUI key.
        const GUI = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

bitflags! {
    /// Joystick hat position. No bits set means centered.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct HatPosition: u8 {
        /// Up.
        const UP = 0x01;
        /// Right.
        const RIGHT = 0x02;
        /// Down.
        const DOWN = 0x04;
        /// Left.
        const LEFT = 0x08;
        /// Up and right.
        const RIGHT_UP = Self::RIGHT.bits() | Self::UP.bits();
        /// Down and right.
        const RIGHT_DOWN = Self::RIGHT.bits() | Self::DOWN.bits();
        /// Up and left.
        const LEFT_UP = Self::LEFT.bits() | Self::UP.bits();
        /// Down and left.
        const LEFT_DOWN = Self::LEFT.bits() | Self::DOWN.bits();
    }
}

bitflags! {
    /// Pen state attached to every pen event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PenInputFlags: u32 {
        /// Pen is touching the surface.
        const DOWN = 1 << 0;
        /// Button 1 pressed.
        const BUTTON_1 = 1 << 1;
        /// Button 2 pressed.
        const BUTTON_2 = 1 << 2;
        /// Button 3 pressed.
        const BUTTON_3 = 1 << 3;
        /// Button 4 pressed.
        const BUTTON_4 = 1 << 4;
        /// Button 5 pressed.
        const BUTTON_5 = 1 << 5;
        /// Eraser tip is in use.
        const ERASER_TIP = 1 << 30;
    }
}

code_newtype! {
    /// Direction reported with mouse wheel motion.
    MouseWheelDirection(u32) {
        /// Scroll direction is as reported.
        NORMAL = 0,
        /// Scroll direction is inverted ("natural" scrolling).
        FLIPPED = 1,
    }
}

code_newtype! {
    /// Battery state reported by joysticks.
    PowerState(i32) {
        /// State could not be determined.
        ERROR = -1,
        /// No information available.
        UNKNOWN = 0,
        /// Running on battery, not charging.
        ON_BATTERY = 1,
        /// No battery present.
        NO_BATTERY = 2,
        /// Charging.
        CHARGING = 3,
        /// Fully charged and plugged in.
        CHARGED = 4,
    }
}

code_newtype! {
    /// Display orientation, carried in `data1` of orientation events.
    DisplayOrientation(i32) {
        /// Orientation unknown.
        UNKNOWN = 0,
        /// Landscape, right side up.
        LANDSCAPE = 1,
        /// Landscape, upside down.
        LANDSCAPE_FLIPPED = 2,
        /// Portrait, right side up.
        PORTRAIT = 3,
        /// Portrait, upside down.
        PORTRAIT_FLIPPED = 4,
    }
}
