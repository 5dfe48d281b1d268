/// Declarative macro generating `EventType`, `ALL_EVENT_TYPES`, the `Event`
/// record and its codec dispatch from a single table.
///
/// Each table row is `Variant = id => "wire_name" => PayloadType`. The macro
/// produces:
///
/// - **`EventType`**: `#[repr(u32)]` enum with the identifier as discriminant,
///   serialized as the wire name.
/// - **`ALL_EVENT_TYPES`**: every variant in table order.
/// - **`Event`**: one variant per row carrying the payload, plus the
///   out-of-table `User`, `Padding` and `Unknown` variants.
/// - **Codec dispatch**: `Event::decode` / `Event::encode_into` matching on
///   the identifier, and `EventType::layout` for the layout tests.
macro_rules! define_events {
    (
        $(
            $(#[doc = $doc:literal])*
            $variant:ident = $id:literal => $wire:literal => $payload:ty
        ),* $(,)?
    ) => {
        // ── EventType enum ──────────────────────────────────────────

        /// Identifier of every event kind a backend can produce.
        ///
        /// The discriminant is the identifier stored in the record header.
        /// User-range identifiers and the padding identifier are not listed
        /// here; they decode to [`Event::User`] and [`Event::Padding`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u32)]
        pub enum EventType {
            $(
                $(#[doc = $doc])*
                #[serde(rename = $wire)]
                $variant = $id,
            )*
        }

        // ── ALL_EVENT_TYPES constant ────────────────────────────────

        /// All event type variants in ascending identifier order.
        pub const ALL_EVENT_TYPES: [EventType; { [$($wire,)*].len() }] = [
            $(EventType::$variant,)*
        ];

        // ── EventType methods ───────────────────────────────────────

        impl EventType {
            /// Identifier stored in the record header.
            #[must_use]
            pub const fn raw(self) -> u32 {
                self as u32
            }

            /// Look up a listed identifier.
            #[must_use]
            pub const fn from_raw(id: u32) -> Option<Self> {
                match id {
                    $($id => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Canonical wire string (e.g. `"window_resized"`).
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }

            /// Field placement of this type's payload.
            #[must_use]
            pub fn layout(self) -> &'static [FieldLayout] {
                match self {
                    $(Self::$variant => <$payload as Payload>::LAYOUT,)*
                }
            }
        }

        impl std::fmt::Display for EventType {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for EventType {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)*
                    _ => Err(format!("unknown event type: {s}")),
                }
            }
        }

        impl From<EventType> for u32 {
            fn from(event_type: EventType) -> Self {
                event_type.raw()
            }
        }

        // ── Event record ────────────────────────────────────────────

        /// One decoded event: identifier plus typed payload.
        ///
        /// Matching is exhaustive. Identifiers outside the table decode to
        /// [`Event::User`] (user range), [`Event::Padding`] (the out-of-band
        /// padding identifier) or [`Event::Unknown`].
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum Event {
            $(
                $(#[doc = $doc])*
                $variant($payload),
            )*
            /// Application-defined event from the user range.
            User(UserEvent),
            /// Raw padding record, never produced by backends.
            Padding(PaddingEvent),
            /// Identifier no variant claims.
            Unknown(UnknownEvent),
        }

        impl Event {
            /// A record of `event_type` with every payload field zeroed.
            #[must_use]
            pub fn empty(event_type: EventType) -> Self {
                match event_type {
                    $(EventType::$variant => Self::$variant(<$payload>::default()),)*
                }
            }

            /// The listed type, or `None` for user, padding and unknown records.
            #[must_use]
            pub const fn event_type(&self) -> Option<EventType> {
                match self {
                    $(Self::$variant(_) => Some(EventType::$variant),)*
                    Self::User(_) | Self::Padding(_) | Self::Unknown(_) => None,
                }
            }

            /// Identifier written to the record header.
            #[must_use]
            pub const fn raw_type(&self) -> u32 {
                match self {
                    $(Self::$variant(_) => $id,)*
                    Self::User(payload) => payload.event_type,
                    Self::Padding(_) => PADDING_EVENT,
                    Self::Unknown(payload) => payload.event_type,
                }
            }

            /// Decode an external record. Never fails.
            #[must_use]
            #[allow(clippy::too_many_lines)]
            pub fn decode(raw: &RawEvent) -> Self {
                let id = raw.event_type();
                match EventType::from_raw(id) {
                    $(Some(EventType::$variant) => Self::$variant(<$payload as Payload>::read(raw)),)*
                    None if is_user_event(id) => Self::User(UserEvent::read(raw)),
                    None if id == PADDING_EVENT => Self::Padding(PaddingEvent::read(raw)),
                    None => Self::Unknown(UnknownEvent::read(raw)),
                }
            }

            /// Encode into caller-supplied storage, zeroing unused bytes.
            #[allow(clippy::too_many_lines)]
            pub fn encode_into(&self, raw: &mut RawEvent) {
                *raw = RawEvent::zeroed();
                raw.set_event_type(self.raw_type());
                match self {
                    $(Self::$variant(payload) => payload.write(raw),)*
                    Self::User(payload) => payload.write(raw),
                    Self::Padding(payload) => payload.write(raw),
                    Self::Unknown(payload) => payload.write(raw),
                }
            }

            /// Object-safe view of the payload.
            #[must_use]
            pub fn fields(&self) -> &dyn PayloadFields {
                match self {
                    $(Self::$variant(payload) => payload,)*
                    Self::User(payload) => payload,
                    Self::Padding(payload) => payload,
                    Self::Unknown(payload) => payload,
                }
            }

            /// Mutable object-safe view of the payload.
            pub fn fields_mut(&mut self) -> &mut dyn PayloadFields {
                match self {
                    $(Self::$variant(payload) => payload,)*
                    Self::User(payload) => payload,
                    Self::Padding(payload) => payload,
                    Self::Unknown(payload) => payload,
                }
            }

            /// Wire name of the record (`"user"`, `"padding"` or `"unknown"`
            /// for records outside the table).
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $wire,)*
                    Self::User(_) => "user",
                    Self::Padding(_) => "padding",
                    Self::Unknown(_) => "unknown",
                }
            }
        }
    };
}
