//! Event categories and identifier ranges.
//!
//! Every category owns one contiguous, inclusive identifier range running up
//! to the start of the next category, so the categories tile `0x100..=0xFFFF`.
//! Ranges contain identifiers no event uses yet; iteration still yields them.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::event_type::{EventType, LAST_EVENT, USER_EVENT_FIRST};

/// An inclusive `[min, max]` identifier range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventRange {
    /// Lowest identifier in the range.
    pub min: u32,
    /// Highest identifier in the range.
    pub max: u32,
}

impl EventRange {
    /// Every valid identifier.
    pub const ALL: Self = Self::new(0, LAST_EVENT);

    /// A range from `min` to `max`, both inclusive.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range holding a single identifier.
    #[must_use]
    pub const fn single(id: u32) -> Self {
        Self::new(id, id)
    }

    /// Whether `min <= id <= max`.
    #[must_use]
    pub const fn contains(&self, id: u32) -> bool {
        self.min <= id && id <= self.max
    }

    /// Every identifier in the range, ascending. Empty if `min > max`.
    #[must_use]
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl IntoIterator for EventRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<RangeInclusive<u32>> for EventRange {
    fn from(range: RangeInclusive<u32>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<EventType> for EventRange {
    fn from(event_type: EventType) -> Self {
        Self::single(event_type.raw())
    }
}

impl From<u32> for EventRange {
    fn from(id: u32) -> Self {
        Self::single(id)
    }
}

impl fmt::Display for EventRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}..={:#06x}", self.min, self.max)
    }
}

/// Event categories used for group operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventGroup {
    /// Every identifier.
    All,
    /// Application lifecycle.
    Application,
    /// Display changes.
    Display,
    /// Window changes.
    Window,
    /// Keyboard and text input.
    Keyboard,
    /// Mouse input.
    Mouse,
    /// Joystick input.
    Joystick,
    /// Gamepad input.
    Gamepad,
    /// Touch input.
    Touch,
    /// Clipboard changes.
    Clipboard,
    /// Drag and drop.
    DragAndDrop,
    /// Audio device hotplug.
    Audio,
    /// Sensor samples.
    Sensor,
    /// Pen input.
    Pen,
    /// Camera device hotplug and permissions.
    Camera,
    /// Renderer resets.
    Render,
    /// Reserved for platform-private use.
    Reserved,
    /// Internal wake-up events.
    Internal,
    /// Application-defined events.
    User,
}

/// Every group in table order.
pub const ALL_GROUPS: [EventGroup; 19] = [
    EventGroup::All,
    EventGroup::Application,
    EventGroup::Display,
    EventGroup::Window,
    EventGroup::Keyboard,
    EventGroup::Mouse,
    EventGroup::Joystick,
    EventGroup::Gamepad,
    EventGroup::Touch,
    EventGroup::Clipboard,
    EventGroup::DragAndDrop,
    EventGroup::Audio,
    EventGroup::Sensor,
    EventGroup::Pen,
    EventGroup::Camera,
    EventGroup::Render,
    EventGroup::Reserved,
    EventGroup::Internal,
    EventGroup::User,
];

impl EventGroup {
    /// The identifier range this group covers.
    #[must_use]
    pub const fn range(self) -> EventRange {
        let (min, max) = match self {
            Self::All => (0, LAST_EVENT),
            Self::Application => (0x100, 0x150),
            Self::Display => (0x151, 0x201),
            Self::Window => (0x202, 0x2FF),
            Self::Keyboard => (0x300, 0x3FF),
            Self::Mouse => (0x400, 0x5FF),
            Self::Joystick => (0x600, 0x64F),
            Self::Gamepad => (0x650, 0x6FF),
            Self::Touch => (0x700, 0x8FF),
            Self::Clipboard => (0x900, 0xFFF),
            Self::DragAndDrop => (0x1000, 0x10FF),
            Self::Audio => (0x1100, 0x11FF),
            Self::Sensor => (0x1200, 0x12FF),
            Self::Pen => (0x1300, 0x13FF),
            Self::Camera => (0x1400, 0x1FFF),
            Self::Render => (0x2000, 0x3FFF),
            Self::Reserved => (0x4000, 0x7EFF),
            Self::Internal => (0x7F00, 0x7FFF),
            Self::User => (USER_EVENT_FIRST, LAST_EVENT),
        };
        EventRange::new(min, max)
    }

    /// Whether `id` lies in this group's range.
    #[must_use]
    pub const fn contains(self, id: u32) -> bool {
        self.range().contains(id)
    }

    /// Every identifier in this group's range, ascending.
    #[must_use]
    pub fn iter(self) -> RangeInclusive<u32> {
        self.range().iter()
    }

    /// The most specific group containing `id`. Never [`EventGroup::All`].
    #[must_use]
    pub fn of(id: u32) -> Option<Self> {
        ALL_GROUPS[1..]
            .iter()
            .copied()
            .find(|group| group.contains(id))
    }

    /// Snake-case group name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Application => "application",
            Self::Display => "display",
            Self::Window => "window",
            Self::Keyboard => "keyboard",
            Self::Mouse => "mouse",
            Self::Joystick => "joystick",
            Self::Gamepad => "gamepad",
            Self::Touch => "touch",
            Self::Clipboard => "clipboard",
            Self::DragAndDrop => "drag_and_drop",
            Self::Audio => "audio",
            Self::Sensor => "sensor",
            Self::Pen => "pen",
            Self::Camera => "camera",
            Self::Render => "render",
            Self::Reserved => "reserved",
            Self::Internal => "internal",
            Self::User => "user",
        }
    }
}

impl From<EventGroup> for EventRange {
    fn from(group: EventGroup) -> Self {
        group.range()
    }
}

impl fmt::Display for EventGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EventType {
    /// The group this type belongs to.
    #[must_use]
    pub fn group(self) -> EventGroup {
        EventGroup::of(self.raw()).unwrap_or(EventGroup::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::event_type::ALL_EVENT_TYPES;

    #[test]
    fn window_resized_is_a_window_event() {
        let id = EventType::WindowResized.raw();
        assert!(EventGroup::Window.contains(id));
        assert!(!EventGroup::Mouse.contains(id));
        assert!(EventGroup::All.contains(id));
    }

    #[test]
    fn every_listed_type_has_a_specific_group() {
        for event_type in ALL_EVENT_TYPES {
            let group = EventGroup::of(event_type.raw());
            assert!(group.is_some(), "{event_type} has no group");
            assert_ne!(group, Some(EventGroup::All));
        }
    }

    #[test]
    fn specific_groups_tile_the_identifier_domain() {
        let specific = &ALL_GROUPS[1..];
        assert_eq!(specific[0].range().min, EventType::Quit.raw());
        assert_eq!(specific[specific.len() - 1].range().max, LAST_EVENT);
        for pair in specific.windows(2) {
            let (a, b) = (pair[0].range(), pair[1].range());
            assert!(a.min <= a.max, "{} is empty", pair[0]);
            assert_eq!(a.max + 1, b.min, "{} and {} leave a gap or overlap", pair[0], pair[1]);
        }
    }

    #[test]
    fn unlisted_subtypes_still_belong_to_their_group() {
        assert!(EventGroup::Keyboard.contains(0x308));
        assert_eq!(EventGroup::of(0x109), Some(EventGroup::Application));
        assert_eq!(EventGroup::of(0x150), Some(EventGroup::Application));
        assert_eq!(EventGroup::of(0x7F01), Some(EventGroup::Internal));
        assert_eq!(EventGroup::of(0xFF), None);
    }

    #[test]
    fn iteration_is_ascending_and_restartable() {
        let ids: Vec<u32> = EventGroup::Touch.iter().take(4).collect();
        assert_eq!(ids, vec![0x700, 0x701, 0x702, 0x703]);
        assert_eq!(EventGroup::Touch.iter().count(), 0x200);
        assert_eq!(EventGroup::Touch.iter().count(), 0x200);
        assert!(EventGroup::Display.iter().all(|id| EventGroup::Display.contains(id)));
        assert_eq!(EventGroup::User.iter().count(), 0x8000);
    }

    #[test]
    fn user_range() {
        assert_eq!(EventGroup::of(0x8000), Some(EventGroup::User));
        assert_eq!(EventGroup::of(0xFFFF), Some(EventGroup::User));
        assert_eq!(EventGroup::of(0x1_0000), None);
    }

    #[test]
    fn type_group_lookup() {
        assert_eq!(EventType::KeyDown.group(), EventGroup::Keyboard);
        assert_eq!(EventType::PollSentinel.group(), EventGroup::Internal);
        assert_eq!(EventType::Private2.group(), EventGroup::Reserved);
    }

    #[test]
    fn range_conversions() {
        assert_eq!(EventRange::from(EventGroup::Pen), EventRange::new(0x1300, 0x13FF));
        assert_eq!(EventRange::from(EventType::Quit), EventRange::single(0x100));
        assert_eq!(EventRange::from(0x200..=0x300), EventRange::new(0x200, 0x300));
        assert_eq!(EventRange::new(5, 1).iter().count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(EventGroup::DragAndDrop.to_string(), "drag_and_drop");
        assert_eq!(EventGroup::Window.range().to_string(), "0x0202..=0x02ff");
    }
}
