//! The event identifier table.
//!
//! Numbering is a version-pinned protocol shared with native consumers of
//! the external record, so identifiers must never be renumbered.

use serde::{Deserialize, Serialize};

use super::payloads::{
    AudioDeviceEvent, CameraDeviceEvent, ClipboardEvent, CommonEvent, DisplayEvent, DropEvent,
    FieldLayout, GamepadAxisEvent, GamepadButtonEvent, GamepadDeviceEvent, GamepadSensorEvent,
    GamepadTouchpadEvent, JoyAxisEvent, JoyBallEvent, JoyBatteryEvent, JoyButtonEvent,
    JoyDeviceEvent, JoyHatEvent, KeyboardDeviceEvent, KeyboardEvent, MouseButtonEvent,
    MouseDeviceEvent, MouseMotionEvent, MouseWheelEvent, PaddingEvent, Payload, PayloadFields,
    PenAxisEvent, PenButtonEvent, PenMotionEvent, PenProximityEvent, PenTouchEvent, RenderEvent,
    SensorEvent, TextEditingCandidatesEvent, TextEditingEvent, TextInputEvent, TouchFingerEvent,
    UnknownEvent, UserEvent, WindowEvent,
};
use crate::codec::RawEvent;

/// First identifier of the user range.
pub const USER_EVENT_FIRST: u32 = 0x8000;

/// Last valid event identifier; also the end of the user range.
pub const LAST_EVENT: u32 = 0xFFFF;

/// Reserved out-of-band identifier used only to pad the record.
pub const PADDING_EVENT: u32 = 0x7FFF_FFFF;

/// Whether `id` lies in the user range.
#[must_use]
pub const fn is_user_event(id: u32) -> bool {
    id >= USER_EVENT_FIRST && id <= LAST_EVENT
}

define_events! {
    // Application
    /// User-requested quit.
    Quit = 0x100 => "quit" => CommonEvent,
    /// The OS is terminating the application.
    Terminating = 0x101 => "terminating" => CommonEvent,
    /// The OS is low on memory.
    LowMemory = 0x102 => "low_memory" => CommonEvent,
    /// The application is about to enter the background.
    WillEnterBackground = 0x103 => "will_enter_background" => CommonEvent,
    /// The application entered the background.
    DidEnterBackground = 0x104 => "did_enter_background" => CommonEvent,
    /// The application is about to enter the foreground.
    WillEnterForeground = 0x105 => "will_enter_foreground" => CommonEvent,
    /// The application is now interactive.
    DidEnterForeground = 0x106 => "did_enter_foreground" => CommonEvent,
    /// The user's locale preferences changed.
    LocaleChanged = 0x107 => "locale_changed" => CommonEvent,
    /// The system theme changed.
    SystemThemeChanged = 0x108 => "system_theme_changed" => CommonEvent,

    // Display
    /// Display orientation changed.
    DisplayOrientation = 0x151 => "display_orientation" => DisplayEvent,
    /// Display was added.
    DisplayAdded = 0x152 => "display_added" => DisplayEvent,
    /// Display was removed.
    DisplayRemoved = 0x153 => "display_removed" => DisplayEvent,
    /// Display moved.
    DisplayMoved = 0x154 => "display_moved" => DisplayEvent,
    /// Desktop display mode changed.
    DisplayDesktopModeChanged = 0x155 => "display_desktop_mode_changed" => DisplayEvent,
    /// Current display mode changed.
    DisplayCurrentModeChanged = 0x156 => "display_current_mode_changed" => DisplayEvent,
    /// Display content scale changed.
    DisplayContentScaleChanged = 0x157 => "display_content_scale_changed" => DisplayEvent,

    // Window
    /// Window was shown.
    WindowShown = 0x202 => "window_shown" => WindowEvent,
    /// Window was hidden.
    WindowHidden = 0x203 => "window_hidden" => WindowEvent,
    /// Window was exposed and should be redrawn.
    WindowExposed = 0x204 => "window_exposed" => WindowEvent,
    /// Window moved to `data1`, `data2`.
    WindowMoved = 0x205 => "window_moved" => WindowEvent,
    /// Window resized to `data1` x `data2`.
    WindowResized = 0x206 => "window_resized" => WindowEvent,
    /// Pixel size changed to `data1` x `data2`.
    WindowPixelSizeChanged = 0x207 => "window_pixel_size_changed" => WindowEvent,
    /// Metal view resized.
    WindowMetalViewResized = 0x208 => "window_metal_view_resized" => WindowEvent,
    /// Window was minimized.
    WindowMinimized = 0x209 => "window_minimized" => WindowEvent,
    /// Window was maximized.
    WindowMaximized = 0x20A => "window_maximized" => WindowEvent,
    /// Window was restored.
    WindowRestored = 0x20B => "window_restored" => WindowEvent,
    /// Window gained mouse focus.
    WindowMouseEnter = 0x20C => "window_mouse_enter" => WindowEvent,
    /// Window lost mouse focus.
    WindowMouseLeave = 0x20D => "window_mouse_leave" => WindowEvent,
    /// Window gained keyboard focus.
    WindowFocusGained = 0x20E => "window_focus_gained" => WindowEvent,
    /// Window lost keyboard focus.
    WindowFocusLost = 0x20F => "window_focus_lost" => WindowEvent,
    /// The window manager asked to close the window.
    WindowCloseRequested = 0x210 => "window_close_requested" => WindowEvent,
    /// Window had a hit test.
    WindowHitTest = 0x211 => "window_hit_test" => WindowEvent,
    /// Window ICC profile changed.
    WindowIccProfileChanged = 0x212 => "window_icc_profile_changed" => WindowEvent,
    /// Window moved to display `data1`.
    WindowDisplayChanged = 0x213 => "window_display_changed" => WindowEvent,
    /// Window display scale changed.
    WindowDisplayScaleChanged = 0x214 => "window_display_scale_changed" => WindowEvent,
    /// Window safe area changed.
    WindowSafeAreaChanged = 0x215 => "window_safe_area_changed" => WindowEvent,
    /// Window is fully occluded.
    WindowOccluded = 0x216 => "window_occluded" => WindowEvent,
    /// Window entered fullscreen.
    WindowEnterFullscreen = 0x217 => "window_enter_fullscreen" => WindowEvent,
    /// Window left fullscreen.
    WindowLeaveFullscreen = 0x218 => "window_leave_fullscreen" => WindowEvent,
    /// Window is being destroyed.
    WindowDestroyed = 0x219 => "window_destroyed" => WindowEvent,
    /// Window HDR properties changed.
    WindowHdrStateChanged = 0x21A => "window_hdr_state_changed" => WindowEvent,

    // Keyboard
    /// Key pressed.
    KeyDown = 0x300 => "key_down" => KeyboardEvent,
    /// Key released.
    KeyUp = 0x301 => "key_up" => KeyboardEvent,
    /// Composition text changed.
    TextEditing = 0x302 => "text_editing" => TextEditingEvent,
    /// Text committed.
    TextInput = 0x303 => "text_input" => TextInputEvent,
    /// Keymap changed.
    KeymapChanged = 0x304 => "keymap_changed" => CommonEvent,
    /// Keyboard connected.
    KeyboardAdded = 0x305 => "keyboard_added" => KeyboardDeviceEvent,
    /// Keyboard disconnected.
    KeyboardRemoved = 0x306 => "keyboard_removed" => KeyboardDeviceEvent,
    /// Composition candidates changed.
    TextEditingCandidates = 0x307 => "text_editing_candidates" => TextEditingCandidatesEvent,

    // Mouse
    /// Mouse moved.
    MouseMotion = 0x400 => "mouse_motion" => MouseMotionEvent,
    /// Mouse button pressed.
    MouseButtonDown = 0x401 => "mouse_button_down" => MouseButtonEvent,
    /// Mouse button released.
    MouseButtonUp = 0x402 => "mouse_button_up" => MouseButtonEvent,
    /// Mouse wheel moved.
    MouseWheel = 0x403 => "mouse_wheel" => MouseWheelEvent,
    /// Mouse connected.
    MouseAdded = 0x404 => "mouse_added" => MouseDeviceEvent,
    /// Mouse disconnected.
    MouseRemoved = 0x405 => "mouse_removed" => MouseDeviceEvent,

    // Joystick
    /// Joystick axis moved.
    JoystickAxisMotion = 0x600 => "joystick_axis_motion" => JoyAxisEvent,
    /// Joystick trackball moved.
    JoystickBallMotion = 0x601 => "joystick_ball_motion" => JoyBallEvent,
    /// Joystick hat moved.
    JoystickHatMotion = 0x602 => "joystick_hat_motion" => JoyHatEvent,
    /// Joystick button pressed.
    JoystickButtonDown = 0x603 => "joystick_button_down" => JoyButtonEvent,
    /// Joystick button released.
    JoystickButtonUp = 0x604 => "joystick_button_up" => JoyButtonEvent,
    /// Joystick connected.
    JoystickAdded = 0x605 => "joystick_added" => JoyDeviceEvent,
    /// Joystick disconnected.
    JoystickRemoved = 0x606 => "joystick_removed" => JoyDeviceEvent,
    /// Joystick battery changed.
    JoystickBatteryUpdated = 0x607 => "joystick_battery_updated" => JoyBatteryEvent,
    /// Joystick update batch finished.
    JoystickUpdateComplete = 0x608 => "joystick_update_complete" => JoyDeviceEvent,

    // Gamepad
    /// Gamepad axis moved.
    GamepadAxisMotion = 0x650 => "gamepad_axis_motion" => GamepadAxisEvent,
    /// Gamepad button pressed.
    GamepadButtonDown = 0x651 => "gamepad_button_down" => GamepadButtonEvent,
    /// Gamepad button released.
    GamepadButtonUp = 0x652 => "gamepad_button_up" => GamepadButtonEvent,
    /// Gamepad connected.
    GamepadAdded = 0x653 => "gamepad_added" => GamepadDeviceEvent,
    /// Gamepad disconnected.
    GamepadRemoved = 0x654 => "gamepad_removed" => GamepadDeviceEvent,
    /// Gamepad mapping changed.
    GamepadRemapped = 0x655 => "gamepad_remapped" => GamepadDeviceEvent,
    /// Finger touched a gamepad touchpad.
    GamepadTouchpadDown = 0x656 => "gamepad_touchpad_down" => GamepadTouchpadEvent,
    /// Finger moved on a gamepad touchpad.
    GamepadTouchpadMotion = 0x657 => "gamepad_touchpad_motion" => GamepadTouchpadEvent,
    /// Finger left a gamepad touchpad.
    GamepadTouchpadUp = 0x658 => "gamepad_touchpad_up" => GamepadTouchpadEvent,
    /// Gamepad sensor sample.
    GamepadSensorUpdate = 0x659 => "gamepad_sensor_update" => GamepadSensorEvent,
    /// Gamepad update batch finished.
    GamepadUpdateComplete = 0x65A => "gamepad_update_complete" => GamepadDeviceEvent,
    /// Gamepad Steam handle changed.
    GamepadSteamHandleUpdated = 0x65B => "gamepad_steam_handle_updated" => GamepadDeviceEvent,

    // Touch
    /// Finger touched.
    FingerDown = 0x700 => "finger_down" => TouchFingerEvent,
    /// Finger lifted.
    FingerUp = 0x701 => "finger_up" => TouchFingerEvent,
    /// Finger moved.
    FingerMotion = 0x702 => "finger_motion" => TouchFingerEvent,
    /// Touch cancelled.
    FingerCanceled = 0x703 => "finger_canceled" => TouchFingerEvent,

    // Clipboard
    /// Clipboard changed.
    ClipboardUpdate = 0x900 => "clipboard_update" => ClipboardEvent,

    // Drag and drop
    /// File dropped.
    DropFile = 0x1000 => "drop_file" => DropEvent,
    /// Text dropped.
    DropText = 0x1001 => "drop_text" => DropEvent,
    /// A drop of one or more items began.
    DropBegin = 0x1002 => "drop_begin" => DropEvent,
    /// A drop finished.
    DropComplete = 0x1003 => "drop_complete" => DropEvent,
    /// Drag position changed.
    DropPosition = 0x1004 => "drop_position" => DropEvent,

    // Audio
    /// Audio device added.
    AudioDeviceAdded = 0x1100 => "audio_device_added" => AudioDeviceEvent,
    /// Audio device removed.
    AudioDeviceRemoved = 0x1101 => "audio_device_removed" => AudioDeviceEvent,
    /// Audio device format changed.
    AudioDeviceFormatChanged = 0x1102 => "audio_device_format_changed" => AudioDeviceEvent,

    // Sensor
    /// Sensor sample.
    SensorUpdate = 0x1200 => "sensor_update" => SensorEvent,

    // Pen
    /// Pen entered proximity.
    PenProximityIn = 0x1300 => "pen_proximity_in" => PenProximityEvent,
    /// Pen left proximity.
    PenProximityOut = 0x1301 => "pen_proximity_out" => PenProximityEvent,
    /// Pen touched the surface.
    PenDown = 0x1302 => "pen_down" => PenTouchEvent,
    /// Pen left the surface.
    PenUp = 0x1303 => "pen_up" => PenTouchEvent,
    /// Pen button pressed.
    PenButtonDown = 0x1304 => "pen_button_down" => PenButtonEvent,
    /// Pen button released.
    PenButtonUp = 0x1305 => "pen_button_up" => PenButtonEvent,
    /// Pen moved.
    PenMotion = 0x1306 => "pen_motion" => PenMotionEvent,
    /// Pen axis changed.
    PenAxis = 0x1307 => "pen_axis" => PenAxisEvent,

    // Camera
    /// Camera added.
    CameraDeviceAdded = 0x1400 => "camera_device_added" => CameraDeviceEvent,
    /// Camera removed.
    CameraDeviceRemoved = 0x1401 => "camera_device_removed" => CameraDeviceEvent,
    /// The user approved camera access.
    CameraDeviceApproved = 0x1402 => "camera_device_approved" => CameraDeviceEvent,
    /// The user denied camera access.
    CameraDeviceDenied = 0x1403 => "camera_device_denied" => CameraDeviceEvent,

    // Render
    /// Render targets were reset.
    RenderTargetsReset = 0x2000 => "render_targets_reset" => RenderEvent,
    /// The render device was reset.
    RenderDeviceReset = 0x2001 => "render_device_reset" => RenderEvent,
    /// The render device was lost.
    RenderDeviceLost = 0x2002 => "render_device_lost" => RenderEvent,

    // Reserved
    /// Reserved for platform-private use.
    Private0 = 0x4000 => "private0" => CommonEvent,
    /// Reserved for platform-private use.
    Private1 = 0x4001 => "private1" => CommonEvent,
    /// Reserved for platform-private use.
    Private2 = 0x4002 => "private2" => CommonEvent,
    /// Reserved for platform-private use.
    Private3 = 0x4003 => "private3" => CommonEvent,

    // Internal
    /// Wakes a blocked wait; never returned to callers.
    PollSentinel = 0x7F00 => "poll_sentinel" => CommonEvent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_event_types_has_110_entries() {
        assert_eq!(ALL_EVENT_TYPES.len(), 110);
    }

    #[test]
    fn identifiers_are_unique_and_ascending() {
        for pair in ALL_EVENT_TYPES.windows(2) {
            assert!(pair[0].raw() < pair[1].raw(), "{} >= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<&str> = ALL_EVENT_TYPES.iter().map(|t| t.as_str()).collect();
        assert_eq!(names.len(), ALL_EVENT_TYPES.len());
    }

    #[test]
    fn from_raw_roundtrip() {
        for event_type in ALL_EVENT_TYPES {
            assert_eq!(EventType::from_raw(event_type.raw()), Some(event_type));
        }
        assert_eq!(EventType::from_raw(0), None);
        assert_eq!(EventType::from_raw(0x109), None);
        assert_eq!(EventType::from_raw(USER_EVENT_FIRST), None);
    }

    #[test]
    fn well_known_identifiers() {
        assert_eq!(EventType::Quit.raw(), 0x100);
        assert_eq!(EventType::WindowResized.raw(), 0x206);
        assert_eq!(EventType::KeyDown.raw(), 0x300);
        assert_eq!(EventType::MouseMotion.raw(), 0x400);
        assert_eq!(EventType::GamepadSteamHandleUpdated.raw(), 0x65B);
        assert_eq!(EventType::PenAxis.raw(), 0x1307);
        assert_eq!(EventType::PollSentinel.raw(), 0x7F00);
    }

    #[test]
    fn from_str_roundtrip() {
        for event_type in ALL_EVENT_TYPES {
            let parsed: EventType = event_type.as_str().parse().unwrap();
            assert_eq!(parsed, event_type);
        }
    }

    #[test]
    fn from_str_unknown() {
        let err = "window_exploded".parse::<EventType>().unwrap_err();
        assert_eq!(err, "unknown event type: window_exploded");
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&EventType::MouseWheel).unwrap();
        assert_eq!(json, "\"mouse_wheel\"");
        let back: EventType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EventType::MouseWheel);
    }

    #[test]
    fn user_range_bounds() {
        assert!(is_user_event(0x8000));
        assert!(is_user_event(0xFFFF));
        assert!(!is_user_event(0x7FFF));
        assert!(!is_user_event(0x1_0000));
        assert!(!is_user_event(PADDING_EVENT));
    }

    #[test]
    fn empty_event_has_requested_type() {
        for event_type in ALL_EVENT_TYPES {
            let event = Event::empty(event_type);
            assert_eq!(event.event_type(), Some(event_type));
            assert_eq!(event.raw_type(), event_type.raw());
            assert_eq!(event.name(), event_type.as_str());
        }
    }
}
