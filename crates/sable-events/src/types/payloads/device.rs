//! Joystick, gamepad, sensor, audio and camera payloads.

use sable_core::{
    AudioDeviceId, CameraId, GamepadAxis, GamepadButton, HatPosition, JoystickId, PowerState,
    SensorId,
};

define_payload! {
    /// Joystick connected, disconnected or finished an update batch.
    pub struct JoyDeviceEvent {
        /// Joystick instance.
        pub which: JoystickId = 16,
    }
}

define_payload! {
    /// Joystick axis moved.
    pub struct JoyAxisEvent {
        /// Joystick instance.
        pub which: JoystickId = 16,
        /// Axis index.
        pub axis: u8 = 20,
        /// Axis value, `-32768..=32767`.
        pub value: i16 = 24,
    }
}

define_payload! {
    /// Trackball moved.
    pub struct JoyBallEvent {
        /// Joystick instance.
        pub which: JoystickId = 16,
        /// Ball index.
        pub ball: u8 = 20,
        /// Relative motion.
        pub xrel: i16 = 24,
        /// Relative motion.
        pub yrel: i16 = 26,
    }
}

define_payload! {
    /// Hat position changed.
    pub struct JoyHatEvent {
        /// Joystick instance.
        pub which: JoystickId = 16,
        /// Hat index.
        pub hat: u8 = 20,
        /// New hat position.
        pub value: HatPosition = 21,
    }
}

define_payload! {
    /// Joystick button pressed or released.
    pub struct JoyButtonEvent {
        /// Joystick instance.
        pub which: JoystickId = 16,
        /// Button index.
        pub button: u8 = 20,
        /// Pressed (`true`) or released.
        pub down: bool = 21,
    }
}

define_payload! {
    /// Joystick battery state changed.
    pub struct JoyBatteryEvent {
        /// Joystick instance.
        pub which: JoystickId = 16,
        /// Power state.
        pub state: PowerState = 20,
        /// Battery percentage, `-1` if unknown.
        pub percent: i32 = 24,
    }
}

define_payload! {
    /// Gamepad connected, disconnected, remapped or finished an update batch.
    pub struct GamepadDeviceEvent {
        /// Joystick instance backing the gamepad.
        pub which: JoystickId = 16,
    }
}

define_payload! {
    /// Gamepad axis moved.
    pub struct GamepadAxisEvent {
        /// Joystick instance backing the gamepad.
        pub which: JoystickId = 16,
        /// Axis.
        pub axis: GamepadAxis = 20,
        /// Axis value, `-32768..=32767`.
        pub value: i16 = 24,
    }
}

define_payload! {
    /// Gamepad button pressed or released.
    pub struct GamepadButtonEvent {
        /// Joystick instance backing the gamepad.
        pub which: JoystickId = 16,
        /// Button.
        pub button: GamepadButton = 20,
        /// Pressed (`true`) or released.
        pub down: bool = 21,
    }
}

define_payload! {
    /// Finger touched, moved on or left a gamepad touchpad.
    pub struct GamepadTouchpadEvent {
        /// Joystick instance backing the gamepad.
        pub which: JoystickId = 16,
        /// Touchpad index.
        pub touchpad: i32 = 20,
        /// Finger index.
        pub finger: i32 = 24,
        /// Normalized position, `0.0..=1.0`, left to right.
        pub x: f32 = 28,
        /// Normalized position, `0.0..=1.0`, top to bottom.
        pub y: f32 = 32,
        /// Normalized pressure.
        pub pressure: f32 = 36,
    }
}

define_payload! {
    /// Gamepad sensor sample.
    pub struct GamepadSensorEvent {
        /// Joystick instance backing the gamepad.
        pub which: JoystickId = 16,
        /// Sensor type.
        pub sensor: i32 = 20,
        /// Up to three sensor values.
        pub data: [f32; 3] = 24,
        /// Sensor timestamp in nanoseconds, `0` if unavailable.
        pub sensor_timestamp: u64 = 40,
    }
}

define_payload! {
    /// Standalone sensor sample.
    pub struct SensorEvent {
        /// Sensor instance.
        pub which: SensorId = 16,
        /// Up to six sensor values.
        pub data: [f32; 6] = 20,
        /// Sensor timestamp in nanoseconds, `0` if unavailable.
        pub sensor_timestamp: u64 = 48,
    }
}

define_payload! {
    /// Audio device added, removed or changed format.
    pub struct AudioDeviceEvent {
        /// Audio device.
        pub which: AudioDeviceId = 16,
        /// Recording (`true`) or playback device.
        pub recording: bool = 20,
    }
}

define_payload! {
    /// Camera added, removed, approved or denied.
    pub struct CameraDeviceEvent {
        /// Camera device.
        pub which: CameraId = 16,
    }
}
