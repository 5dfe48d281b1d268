//! Device and window ID newtypes.
//!
//! Every source of input has a distinct ID type implemented as a transparent
//! newtype over the integer the platform hands out. This prevents passing a
//! joystick ID where a window ID is expected. The value `0` is never handed
//! out by a backend and means "no device".

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! device_id {
    ($(#[$meta:meta])* $name:ident($repr:ty)) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            /// The "no device" value.
            pub const NONE: Self = Self(0);

            /// Raw integer value as stored in the external record.
            #[must_use]
            pub const fn raw(self) -> $repr {
                self.0
            }

            /// Whether this ID refers to an actual device.
            #[must_use]
            pub const fn is_some(self) -> bool {
                self.0 != 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for $repr {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

device_id! {
    /// Window an event was delivered to.
    WindowId(u32)
}

device_id! {
    /// Connected display.
    DisplayId(u32)
}

device_id! {
    /// Keyboard instance.
    KeyboardId(u32)
}

device_id! {
    /// Mouse instance.
    MouseId(u32)
}

device_id! {
    /// Joystick (and gamepad) instance.
    JoystickId(u32)
}

device_id! {
    /// Sensor instance.
    SensorId(u32)
}

device_id! {
    /// Audio playback or recording device.
    AudioDeviceId(u32)
}

device_id! {
    /// Camera device.
    CameraId(u32)
}

device_id! {
    /// Pen instance.
    PenId(u32)
}

device_id! {
    /// Touch device.
    TouchId(u64)
}

device_id! {
    /// Finger on a touch device.
    FingerId(u64)
}

impl MouseId {
    /// Events synthesized from touch input carry this mouse ID.
    pub const TOUCH: Self = Self(u32::MAX);
}

impl TouchId {
    /// Touch events synthesized from mouse input carry this touch ID.
    pub const MOUSE: Self = Self(u64::MAX);
}
