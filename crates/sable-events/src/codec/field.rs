//! [`RawField`] implementations for every value type a payload can carry.

use std::fmt;

use sable_core::{
    AudioDeviceId, CameraId, DisplayId, FingerId, GamepadAxis, GamepadButton, HatPosition,
    JoystickId, KeyboardId, Keycode, Keymod, MouseButton, MouseButtonFlags, MouseId,
    MouseWheelDirection, PenAxis, PenId, PenInputFlags, PowerState, Scancode, SensorId, TouchId,
    WindowId,
};

use super::{PAYLOAD_SIZE, RawEvent, RawPayload};
use crate::transient::TransientRef;

/// A value with a fixed size and alignment inside the external record.
pub trait RawField: Copy {
    /// Size in bytes.
    const SIZE: usize;
    /// Required alignment of the field offset.
    const ALIGN: usize;

    /// Read the value at `offset`.
    fn read_from(raw: &RawEvent, offset: usize) -> Self;

    /// Write the value at `offset`.
    fn write_to(self, raw: &mut RawEvent, offset: usize);

    /// Push any transient handle this value holds.
    fn collect_refs(self, _out: &mut Vec<TransientRef>) {}

    /// Format the value for event descriptions.
    fn fmt_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! primitive_field {
    ($($ty:ty),* $(,)?) => {$(
        impl RawField for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();
            const ALIGN: usize = std::mem::size_of::<$ty>();

            fn read_from(raw: &RawEvent, offset: usize) -> Self {
                <$ty>::from_ne_bytes(raw.bytes_at(offset))
            }

            fn write_to(self, raw: &mut RawEvent, offset: usize) {
                raw.put_bytes(offset, self.to_ne_bytes());
            }

            fn fmt_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{self}")
            }
        }
    )*};
}

primitive_field!(u8, u16, i16, u32, i32, u64, f32);

impl RawField for bool {
    const SIZE: usize = 1;
    const ALIGN: usize = 1;

    fn read_from(raw: &RawEvent, offset: usize) -> Self {
        u8::read_from(raw, offset) != 0
    }

    fn write_to(self, raw: &mut RawEvent, offset: usize) {
        u8::from(self).write_to(raw, offset);
    }

    fn fmt_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl<const N: usize> RawField for [f32; N] {
    const SIZE: usize = 4 * N;
    const ALIGN: usize = 4;

    fn read_from(raw: &RawEvent, offset: usize) -> Self {
        let mut out = [0.0; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = f32::read_from(raw, offset + 4 * i);
        }
        out
    }

    fn write_to(self, raw: &mut RawEvent, offset: usize) {
        for (i, value) in self.into_iter().enumerate() {
            value.write_to(raw, offset + 4 * i);
        }
    }

    fn fmt_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Newtypes with a public integer field, displayed through their `Display`.
macro_rules! newtype_field {
    ($($ty:ty => $repr:ty),* $(,)?) => {$(
        impl RawField for $ty {
            const SIZE: usize = <$repr as RawField>::SIZE;
            const ALIGN: usize = <$repr as RawField>::ALIGN;

            fn read_from(raw: &RawEvent, offset: usize) -> Self {
                Self(<$repr>::read_from(raw, offset))
            }

            fn write_to(self, raw: &mut RawEvent, offset: usize) {
                self.0.write_to(raw, offset);
            }

            fn fmt_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{self}")
            }
        }
    )*};
}

newtype_field!(
    WindowId => u32,
    DisplayId => u32,
    KeyboardId => u32,
    MouseId => u32,
    JoystickId => u32,
    SensorId => u32,
    AudioDeviceId => u32,
    CameraId => u32,
    PenId => u32,
    TouchId => u64,
    FingerId => u64,
    Scancode => u32,
    Keycode => u32,
    MouseButton => u8,
    GamepadAxis => u8,
    GamepadButton => u8,
    PenAxis => u32,
    MouseWheelDirection => u32,
    PowerState => i32,
);

/// Bit sets, decoded with unknown bits retained.
macro_rules! flags_field {
    ($($ty:ty => $repr:ty),* $(,)?) => {$(
        impl RawField for $ty {
            const SIZE: usize = <$repr as RawField>::SIZE;
            const ALIGN: usize = <$repr as RawField>::ALIGN;

            fn read_from(raw: &RawEvent, offset: usize) -> Self {
                Self::from_bits_retain(<$repr>::read_from(raw, offset))
            }

            fn write_to(self, raw: &mut RawEvent, offset: usize) {
                self.bits().write_to(raw, offset);
            }

            fn fmt_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#x}", self.bits())
            }
        }
    )*};
}

flags_field!(
    MouseButtonFlags => u32,
    Keymod => u16,
    HatPosition => u8,
    PenInputFlags => u32,
);

impl RawField for RawPayload {
    const SIZE: usize = PAYLOAD_SIZE;
    const ALIGN: usize = 8;

    fn read_from(raw: &RawEvent, offset: usize) -> Self {
        Self(raw.bytes_at(offset))
    }

    fn write_to(self, raw: &mut RawEvent, offset: usize) {
        raw.put_bytes(offset, self.0);
    }

    fn fmt_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl RawField for TransientRef {
    const SIZE: usize = 8;
    const ALIGN: usize = 8;

    fn read_from(raw: &RawEvent, offset: usize) -> Self {
        Self::from_raw(u64::read_from(raw, offset))
    }

    fn write_to(self, raw: &mut RawEvent, offset: usize) {
        self.raw().write_to(raw, offset);
    }

    fn collect_refs(self, out: &mut Vec<TransientRef>) {
        if !self.is_null() {
            out.push(self);
        }
    }

    fn fmt_value(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
