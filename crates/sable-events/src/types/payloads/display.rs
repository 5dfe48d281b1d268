//! Display, window and render payloads.

use sable_core::{DisplayId, DisplayOrientation, WindowId};

define_payload! {
    /// Display state change.
    ///
    /// `data1` carries the new orientation for orientation events; the other
    /// display events leave both data fields at zero.
    pub struct DisplayEvent {
        /// Display the event refers to.
        pub display_id: DisplayId = 16,
        /// Event-dependent data.
        pub data1: i32 = 20,
        /// Event-dependent data.
        pub data2: i32 = 24,
    }
}

impl DisplayEvent {
    /// Orientation carried by an orientation event.
    #[must_use]
    pub const fn orientation(&self) -> DisplayOrientation {
        DisplayOrientation(self.data1)
    }
}

define_payload! {
    /// Window state change.
    ///
    /// Moved/resized events carry the new position or size in `data1`/`data2`;
    /// display-changed events carry the new display ID in `data1`.
    pub struct WindowEvent {
        /// Window the event refers to.
        pub window_id: WindowId = 16,
        /// Event-dependent data.
        pub data1: i32 = 20,
        /// Event-dependent data.
        pub data2: i32 = 24,
    }
    window = window_id;
}

define_payload! {
    /// Renderer reset or loss.
    pub struct RenderEvent {
        /// Window that owns the renderer.
        pub window_id: WindowId = 16,
    }
    window = window_id;
}
