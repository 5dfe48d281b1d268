//! Payload structs, one per event category.
//!
//! Every payload carries the common `timestamp` header plus its own fields at
//! fixed offsets in the external record. The [`define_payload!`] macro turns
//! a field list into the struct, its codec, a compile-time layout check and
//! the [`Payload::LAYOUT`] table used by the layout tests.

use std::fmt;

use sable_core::WindowId;

use crate::codec::RawEvent;
use crate::transient::TransientRef;

/// Placement of one payload field inside the external record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field name.
    pub name: &'static str,
    /// Byte offset from the start of the record.
    pub offset: usize,
    /// Size in bytes.
    pub size: usize,
}

/// Object-safe view over any payload.
pub trait PayloadFields: fmt::Debug {
    /// Nanoseconds since subsystem start.
    fn timestamp(&self) -> u64;

    /// Overwrite the timestamp.
    fn set_timestamp(&mut self, timestamp: u64);

    /// The window this payload refers to, if it has one and it is set.
    fn window_id(&self) -> Option<WindowId> {
        None
    }

    /// Push every non-null transient handle held by the payload.
    fn transient_refs(&self, out: &mut Vec<TransientRef>);

    /// Write ` name=value` pairs for each field.
    fn fmt_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A payload that can be read from and written to the external record.
pub trait Payload: PayloadFields + Sized {
    /// Offsets and sizes of the category-specific fields.
    const LAYOUT: &'static [FieldLayout];

    /// Read the header timestamp and all fields.
    fn read(raw: &RawEvent) -> Self;

    /// Write the header timestamp and all fields. Does not touch the type.
    fn write(&self, raw: &mut RawEvent);
}

macro_rules! define_payload {
    (@window) => {};
    (@window $wfield:ident) => {
        fn window_id(&self) -> Option<sable_core::WindowId> {
            self.$wfield.is_some().then_some(self.$wfield)
        }
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty = $offset:literal
            ),* $(,)?
        }
        $(window = $wfield:ident;)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name {
            /// Nanoseconds since subsystem start.
            pub timestamp: u64,
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        const _: () = {
            $(
                assert!(
                    $offset % <$ty as $crate::codec::RawField>::ALIGN == 0,
                    concat!(stringify!($name), ".", stringify!($field), " is misaligned")
                );
                assert!(
                    $offset + <$ty as $crate::codec::RawField>::SIZE <= $crate::codec::EVENT_SIZE,
                    concat!(stringify!($name), ".", stringify!($field), " overruns the record")
                );
            )*
        };

        impl $crate::types::payloads::PayloadFields for $name {
            fn timestamp(&self) -> u64 {
                self.timestamp
            }

            fn set_timestamp(&mut self, timestamp: u64) {
                self.timestamp = timestamp;
            }

            define_payload!(@window $($wfield)?);

            #[allow(unused_variables)]
            fn transient_refs(&self, out: &mut Vec<$crate::transient::TransientRef>) {
                $( $crate::codec::RawField::collect_refs(self.$field, out); )*
            }

            #[allow(unused_variables)]
            fn fmt_fields(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $(
                    f.write_str(concat!(" ", stringify!($field), "="))?;
                    $crate::codec::RawField::fmt_value(self.$field, f)?;
                )*
                Ok(())
            }
        }

        impl $crate::types::payloads::Payload for $name {
            const LAYOUT: &'static [$crate::types::payloads::FieldLayout] = &[
                $(
                    $crate::types::payloads::FieldLayout {
                        name: stringify!($field),
                        offset: $offset,
                        size: <$ty as $crate::codec::RawField>::SIZE,
                    },
                )*
            ];

            fn read(raw: &$crate::codec::RawEvent) -> Self {
                Self {
                    timestamp: raw.timestamp(),
                    $( $field: raw.read($offset), )*
                }
            }

            fn write(&self, raw: &mut $crate::codec::RawEvent) {
                raw.set_timestamp(self.timestamp);
                $( raw.write($offset, self.$field); )*
            }
        }
    };
}

pub mod device;
pub mod display;
pub mod keyboard;
pub mod mouse;
pub mod pen;
pub mod system;

pub use device::{
    AudioDeviceEvent, CameraDeviceEvent, GamepadAxisEvent, GamepadButtonEvent,
    GamepadDeviceEvent, GamepadSensorEvent, GamepadTouchpadEvent, JoyAxisEvent, JoyBallEvent,
    JoyBatteryEvent, JoyButtonEvent, JoyDeviceEvent, JoyHatEvent, SensorEvent,
};
pub use display::{DisplayEvent, RenderEvent, WindowEvent};
pub use keyboard::{
    KeyboardDeviceEvent, KeyboardEvent, TextEditingCandidatesEvent, TextEditingEvent,
    TextInputEvent,
};
pub use mouse::{MouseButtonEvent, MouseDeviceEvent, MouseMotionEvent, MouseWheelEvent};
pub use pen::{
    PenAxisEvent, PenButtonEvent, PenMotionEvent, PenProximityEvent, PenTouchEvent,
    TouchFingerEvent,
};
pub use system::{
    ClipboardEvent, CommonEvent, DropEvent, PaddingEvent, UnknownEvent, UserEvent,
};
