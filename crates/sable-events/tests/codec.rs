//! Codec properties over the whole event table.

use assert_matches::assert_matches;
use proptest::prelude::*;
use sable_core::{JoystickId, MouseButtonFlags, MouseId, PowerState, WindowId};
use sable_events::payloads::{
    GamepadSensorEvent, JoyBatteryEvent, MouseMotionEvent, SensorEvent, UserEvent, WindowEvent,
};
use sable_events::{
    ALL_EVENT_TYPES, EVENT_SIZE, Event, EventGroup, EventType, HEADER_SIZE, PADDING_EVENT,
    RawEvent, is_user_event,
};

#[test]
fn payload_fields_stay_inside_the_record_and_do_not_overlap() {
    for event_type in ALL_EVENT_TYPES {
        let mut spans: Vec<(usize, usize, &str)> = event_type
            .layout()
            .iter()
            .map(|field| (field.offset, field.offset + field.size, field.name))
            .collect();
        spans.sort_unstable();

        for &(start, end, name) in &spans {
            assert!(end <= EVENT_SIZE, "{event_type}.{name} overruns the record");
            assert!(
                start >= HEADER_SIZE || name == "event_type",
                "{event_type}.{name} overlaps the header"
            );
        }
        for pair in spans.windows(2) {
            assert!(
                pair[0].1 <= pair[1].0,
                "{event_type}: {} overlaps {}",
                pair[0].2,
                pair[1].2
            );
        }
    }
}

#[test]
fn sensor_payloads_use_the_full_record_width() {
    let layout = EventType::SensorUpdate.layout();
    let last = layout.iter().map(|f| f.offset + f.size).max().unwrap();
    assert_eq!(last, 56);

    let event = Event::SensorUpdate(SensorEvent {
        data: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        sensor_timestamp: 99,
        ..SensorEvent::default()
    });
    let raw = event.encode();
    assert_eq!(raw.read::<f32>(40), 6.0);
    assert_eq!(raw.read::<u64>(48), 99);
}

#[test]
fn gamepad_sensor_timestamp_offset() {
    let event = Event::GamepadSensorUpdate(GamepadSensorEvent {
        which: JoystickId(2),
        sensor: 1,
        data: [0.5, -0.5, 9.8],
        sensor_timestamp: 123_456,
        ..GamepadSensorEvent::default()
    });
    let raw = event.encode();
    assert_eq!(raw.read::<u64>(40), 123_456);
    assert_eq!(Event::decode(&raw), event);
}

#[test]
fn mouse_motion_roundtrip() {
    let event = Event::MouseMotion(MouseMotionEvent {
        timestamp: 10,
        window_id: WindowId(1),
        which: MouseId(4),
        state: MouseButtonFlags::LEFT | MouseButtonFlags::X1,
        x: 10.5,
        y: 20.25,
        xrel: -1.0,
        yrel: 2.0,
    });
    let decoded = Event::decode(&event.encode());
    assert_eq!(decoded, event);
    assert_eq!(decoded.group(), Some(EventGroup::Mouse));
}

#[test]
fn header_is_shared_by_every_variant() {
    for event_type in ALL_EVENT_TYPES {
        let mut event = Event::empty(event_type);
        event.set_timestamp(0x0102_0304_0506_0708);
        let raw = event.encode();
        assert_eq!(raw.event_type(), event_type.raw());
        assert_eq!(raw.timestamp(), 0x0102_0304_0506_0708);
        assert_eq!(&raw.as_bytes()[4..8], &[0; 4], "{event_type} reserved word");
    }
}

#[test]
fn padding_and_unknown_are_never_errors() {
    let mut raw = RawEvent::zeroed();
    raw.set_event_type(PADDING_EVENT);
    assert_matches!(Event::decode(&raw), Event::Padding(_));
    raw.set_event_type(0x5000);
    assert_matches!(Event::decode(&raw), Event::Unknown(unknown) if unknown.event_type == 0x5000);
}

#[test]
fn unclaimed_records_survive_byte_for_byte() {
    for id in [0x308, 0x150, 0x7F01, 0x5000, PADDING_EVENT] {
        let mut bytes = [0_u8; EVENT_SIZE];
        for (i, byte) in bytes.iter_mut().enumerate().skip(HEADER_SIZE) {
            *byte = i as u8;
        }
        let mut raw = RawEvent::from_bytes(bytes);
        raw.set_event_type(id);
        raw.set_timestamp(55);
        raw.write(16, 9_u32);

        let event = Event::decode(&raw);
        assert_eq!(event.encode().as_bytes(), raw.as_bytes(), "{id:#x}");
    }
}

#[test]
fn unlisted_enum_values_survive_byte_for_byte() {
    let mut raw = Event::empty(EventType::JoystickBatteryUpdated).encode();
    raw.write(16, 3_u32);
    raw.write(20, 7_i32);
    raw.write(24, 50_i32);

    let event = Event::decode(&raw);
    assert_matches!(event, Event::JoystickBatteryUpdated(JoyBatteryEvent { state, .. }) if state == PowerState(7));
    assert_eq!(event.encode().as_bytes(), raw.as_bytes());
    assert_eq!(event.encode().read::<i32>(20), 7);
}

fn any_bytes() -> impl Strategy<Value = [u8; EVENT_SIZE]> {
    (
        prop::array::uniform32(any::<u8>()),
        prop::array::uniform32(any::<u8>()),
        prop::array::uniform32(any::<u8>()),
        prop::array::uniform32(any::<u8>()),
    )
        .prop_map(|(a, b, c, d)| {
            let mut bytes = [0_u8; EVENT_SIZE];
            bytes[..32].copy_from_slice(&a);
            bytes[32..64].copy_from_slice(&b);
            bytes[64..96].copy_from_slice(&c);
            bytes[96..].copy_from_slice(&d);
            bytes
        })
}

/// Payloads with a NaN float never compare equal to themselves.
fn is_comparable(event: &Event) -> bool {
    let copy = *event;
    copy == *event
}

fn any_raw() -> impl Strategy<Value = RawEvent> {
    (prop::sample::select(ALL_EVENT_TYPES.to_vec()), any_bytes()).prop_map(
        |(event_type, bytes)| {
            let mut raw = RawEvent::from_bytes(bytes);
            raw.set_event_type(event_type.raw());
            raw
        },
    )
}

proptest! {
    #[test]
    fn decode_then_encode_is_canonical(raw in any_raw()) {
        let once = Event::decode(&raw).encode();
        let twice = Event::decode(&once).encode();
        prop_assert_eq!(once.as_bytes(), twice.as_bytes());
        prop_assert_eq!(once.event_type(), raw.event_type());
        prop_assert_eq!(once.timestamp(), raw.timestamp());
    }

    #[test]
    fn every_listed_type_roundtrips_with_arbitrary_payload(raw in any_raw()) {
        let event = Event::decode(&raw);
        prop_assume!(is_comparable(&event));
        prop_assert_eq!(Event::decode(&event.encode()), event);
    }

    #[test]
    fn unclaimed_identifiers_keep_every_payload_byte(
        id in any::<u32>(),
        bytes in any_bytes(),
    ) {
        prop_assume!(EventType::from_raw(id).is_none() && !is_user_event(id));
        let mut raw = RawEvent::from_bytes(bytes);
        raw.set_event_type(id);
        raw.as_bytes_mut()[4..8].fill(0);
        let reencoded = Event::decode(&raw).encode();
        prop_assert_eq!(reencoded.as_bytes(), raw.as_bytes());
    }

    #[test]
    fn arbitrary_identifiers_never_panic(id in any::<u32>(), ts in any::<u64>()) {
        let mut raw = RawEvent::zeroed();
        raw.set_event_type(id);
        raw.set_timestamp(ts);
        let event = Event::decode(&raw);
        prop_assert_eq!(event.raw_type(), id);
        prop_assert_eq!(event.timestamp(), ts);
    }

    #[test]
    fn user_events_roundtrip(
        offset in 0_u32..0x8000,
        window in any::<u32>(),
        code in any::<i32>(),
        data1 in any::<u64>(),
        data2 in any::<u64>(),
    ) {
        let event = Event::User(UserEvent {
            timestamp: 1,
            event_type: 0x8000 + offset,
            window_id: WindowId(window),
            code,
            data1,
            data2,
        });
        prop_assert_eq!(Event::decode(&event.encode()), event);
    }

    #[test]
    fn window_events_roundtrip(window in 1_u32.., data1 in any::<i32>(), data2 in any::<i32>()) {
        let event = Event::WindowMoved(WindowEvent {
            timestamp: 3,
            window_id: WindowId(window),
            data1,
            data2,
        });
        let decoded = Event::decode(&event.encode());
        prop_assert_eq!(decoded, event);
        prop_assert_eq!(decoded.window_id(), Some(WindowId(window)));
    }
}
