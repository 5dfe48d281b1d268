//! # sable-core
//!
//! Shared vocabulary for the sable event core.
//!
//! Everything in here is plain data that event payloads carry as fields or
//! that every other crate needs at startup:
//!
//! - **Device IDs**: `WindowId`, `DisplayId`, `JoystickId`, ... as `u32`/`u64` newtypes
//! - **Input value types**: mouse buttons and flags, key modifiers, gamepad
//!   axes/buttons, joystick hats, pen axes, power states
//! - **Clock**: monotonic nanosecond timestamps relative to subsystem start
//! - **Logging**: `tracing` subscriber setup and in-memory capture for tests

#![deny(unsafe_code)]

pub mod clock;
pub mod ids;
pub mod input;
pub mod logging;

pub use clock::Clock;
pub use ids::{
    AudioDeviceId, CameraId, DisplayId, FingerId, JoystickId, KeyboardId, MouseId, PenId,
    SensorId, TouchId, WindowId,
};
pub use input::{
    DisplayOrientation, GamepadAxis, GamepadButton, HatPosition, Keycode, Keymod, MouseButton,
    MouseButtonFlags, MouseWheelDirection, PenAxis, PenInputFlags, PowerState, Scancode,
};
