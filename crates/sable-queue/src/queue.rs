//! The event queue protocol.
//!
//! Events are stored in encoded form, so everything that passes through the
//! queue is exactly what a native consumer of the external record would see.
//!
//! Thread domains:
//! - **Owner thread** (the creator): `poll`, `wait`, `wait_timeout`,
//!   `pump_events`
//! - **Any thread**: everything else
//!
//! Admission order for [`EventQueue::push`]: enabled check, timestamp
//! fill-in, admission filter, capacity check, enqueue, wake waiters, watches.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex, RwLock};
use sable_core::Clock;
use sable_events::{Event, EventRange, EventType, RawEvent, TransientRef};
use sable_settings::QueueSettings;
use tracing::{debug, trace, warn};

use crate::custom::CustomTypeAllocator;
use crate::errors::{QueueError, Result};
use crate::filter::{EventFilter, FilterRegistry, WatchId};
use crate::source::{EventSource, NullSource};
use crate::transient::{TransientData, TransientStore};

const SENTINEL: u32 = EventType::PollSentinel.raw();

/// What [`EventQueue::peep`] does with the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeepAction {
    /// Append the buffer to the queue. The range is ignored.
    Add,
    /// Copy matching events into the buffer, leaving them queued.
    Peek,
    /// Move matching events into the buffer.
    Get,
}

/// A queued record tagged with its arrival order.
#[derive(Clone, Copy)]
struct Queued {
    seq: u64,
    raw: RawEvent,
}

#[derive(Default)]
struct QueueState {
    events: VecDeque<Queued>,
    next_seq: u64,
    transient: TransientStore,
}

impl QueueState {
    fn enqueue(&mut self, raw: RawEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.events.push_back(Queued { seq, raw });
    }

    /// Drop `raw` and everything it references.
    fn discard(&mut self, raw: &RawEvent) {
        let refs = Event::decode(raw).transient_refs();
        self.transient.release(&refs);
    }

    /// Pop the oldest deliverable event, silently dropping sentinels.
    fn pop_deliverable(&mut self) -> Option<Event> {
        while let Some(Queued { raw, .. }) = self.events.pop_front() {
            if raw.event_type() == SENTINEL {
                continue;
            }
            let event = Event::decode(&raw);
            self.transient.retire(&event.transient_refs());
            return Some(event);
        }
        None
    }
}

fn is_visible(raw: &RawEvent, range: EventRange) -> bool {
    let id = raw.event_type();
    id != SENTINEL && range.contains(id)
}

/// A thread-aware FIFO of events with filtering, watching and bulk access.
///
/// Share it across threads behind an `Arc`; only the creating thread may
/// retrieve events through `poll`/`wait`.
pub struct EventQueue {
    state: Mutex<QueueState>,
    available: Condvar,
    disabled: RwLock<HashSet<u32>>,
    registry: Arc<FilterRegistry>,
    allocator: CustomTypeAllocator,
    source: Mutex<Box<dyn EventSource>>,
    clock: Clock,
    owner: ThreadId,
    capacity: usize,
    pump_on_poll: bool,
    wait_slice: Duration,
}

impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventQueue")
            .field("queued", &self.available())
            .field("capacity", &self.capacity)
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// A queue with default settings, owned by the calling thread.
    pub fn new() -> Self {
        Self::with_settings(&QueueSettings::default())
    }

    /// A queue configured from `settings`, owned by the calling thread.
    pub fn with_settings(settings: &QueueSettings) -> Self {
        Self {
            state: Mutex::new(QueueState::default()),
            available: Condvar::new(),
            disabled: RwLock::new(HashSet::new()),
            registry: Arc::new(FilterRegistry::new()),
            allocator: CustomTypeAllocator::new(),
            source: Mutex::new(Box::new(NullSource)),
            clock: Clock::new(),
            owner: thread::current().id(),
            capacity: settings.max_queued_events.max(1),
            pump_on_poll: settings.pump_on_poll,
            wait_slice: Duration::from_millis(settings.wait_poll_interval_ms.max(1)),
        }
    }

    /// Use `registry` for the admission filter and watches.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<FilterRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Pump events from `source` instead of producing nothing.
    #[must_use]
    pub fn with_source(mut self, source: impl EventSource + 'static) -> Self {
        self.source = Mutex::new(Box::new(source));
        self
    }

    /// The filter and watch registry in use.
    pub fn registry(&self) -> &Arc<FilterRegistry> {
        &self.registry
    }

    /// Maximum number of queued events.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Nanoseconds since the queue was created; used to stamp events.
    pub fn now_ns(&self) -> u64 {
        self.clock.now_ns()
    }

    // ── Producing ───────────────────────────────────────────────────

    /// Queue `event`.
    ///
    /// Returns `Ok(false)` when the event was dropped because its type is
    /// disabled or the admission filter rejected it. A zero timestamp is
    /// replaced with the queue clock. Callable from any thread.
    pub fn push(&self, event: &Event) -> Result<bool> {
        let mut event = *event;
        let refs = event.transient_refs();

        if !self.is_enabled(event.raw_type()) {
            trace!(event_type = event.name(), "dropping disabled event");
            self.release(&refs);
            return Ok(false);
        }
        if event.timestamp() == 0 {
            event.set_timestamp(self.clock.now_ns());
        }
        if !self.registry.admits(&event) {
            trace!(event_type = event.name(), "event rejected by filter");
            self.release(&refs);
            return Ok(false);
        }

        {
            let mut state = self.state.lock();
            if state.events.len() >= self.capacity {
                state.transient.release(&refs);
                warn!(
                    event_type = event.name(),
                    capacity = self.capacity,
                    "event queue full, dropping event"
                );
                return Err(QueueError::QueueFull {
                    capacity: self.capacity,
                });
            }
            state.enqueue(event.encode());
        }
        self.available.notify_all();
        trace!(event_type = event.name(), "event queued");

        self.registry.notify_watches(&event);
        Ok(true)
    }

    /// Queue an already-encoded record.
    pub fn push_raw(&self, raw: &RawEvent) -> Result<bool> {
        self.push(&Event::decode(raw))
    }

    /// Queue a record given as bytes; the buffer must be exactly one record.
    pub fn push_bytes(&self, bytes: &[u8]) -> Result<bool> {
        let raw = RawEvent::try_from_slice(bytes)?;
        self.push_raw(&raw)
    }

    // ── Consuming (owner thread) ────────────────────────────────────

    /// Remove and return the oldest event, pumping the backend first if the
    /// queue is empty. `Ok(None)` when nothing is pending.
    pub fn poll(&self) -> Result<Option<Event>> {
        self.check_owner("poll")?;
        self.state.lock().transient.release_retired();

        if self.pump_on_poll && self.is_drained() {
            self.pump()?;
        }
        Ok(self.state.lock().pop_deliverable())
    }

    /// Block until an event is available and return it.
    pub fn wait(&self) -> Result<Event> {
        self.check_owner("wait")?;
        loop {
            if let Some(event) = self.wait_until(None)? {
                return Ok(event);
            }
        }
    }

    /// Block for at most `timeout` waiting for an event.
    ///
    /// `Ok(None)` when the timeout elapsed first. The timeout is best-effort:
    /// a slow backend pump can overshoot it.
    pub fn wait_timeout(&self, timeout: Duration) -> Result<Option<Event>> {
        self.check_owner("wait_timeout")?;
        self.wait_until(Some(Instant::now() + timeout))
    }

    fn wait_until(&self, deadline: Option<Instant>) -> Result<Option<Event>> {
        self.state.lock().transient.release_retired();
        loop {
            if self.pump_on_poll {
                self.pump()?;
            }

            let mut state = self.state.lock();
            if let Some(event) = state.pop_deliverable() {
                return Ok(Some(event));
            }

            let mut slice = self.wait_slice;
            if let Some(deadline) = deadline {
                let now = Instant::now();
                if now >= deadline {
                    return Ok(None);
                }
                slice = slice.min(deadline - now);
            }
            let _ = self.available.wait_for(&mut state, slice);
        }
    }

    /// Run the backend once. Owner thread only.
    pub fn pump_events(&self) -> Result<()> {
        self.check_owner("pump_events")?;
        self.pump()
    }

    fn pump(&self) -> Result<()> {
        // A source pumping re-entrantly through `poll` is a no-op.
        let Some(mut source) = self.source.try_lock() else {
            return Ok(());
        };
        if let Err(err) = source.pump(self) {
            warn!(error = %err, "backend pump failed");
            return Err(err.into());
        }
        Ok(())
    }

    // ── Bulk access ─────────────────────────────────────────────────

    /// Add, peek at or take events in bulk. Callable from any thread.
    ///
    /// - [`PeepAction::Add`] appends `events` without running the filter or
    ///   watches. Disabled types are dropped; adding stops at capacity.
    /// - [`PeepAction::Peek`] copies up to `events.len()` events whose type
    ///   lies in `range`, oldest first.
    /// - [`PeepAction::Get`] does the same and removes them from the queue.
    ///
    /// Returns the number of events transferred.
    pub fn peep(
        &self,
        events: &mut [Event],
        action: PeepAction,
        range: impl Into<EventRange>,
    ) -> usize {
        match action {
            PeepAction::Add => self.add_all(events),
            PeepAction::Peek => self.copy_matching(events, range.into(), false),
            PeepAction::Get => self.copy_matching(events, range.into(), true),
        }
    }

    /// Count what [`peep`](Self::peep) would transfer with a `max`-sized
    /// buffer, without changing the queue.
    pub fn peep_size(
        &self,
        max: usize,
        action: PeepAction,
        range: impl Into<EventRange>,
    ) -> usize {
        let state = self.state.lock();
        match action {
            PeepAction::Add => max.min(self.capacity.saturating_sub(state.events.len())),
            PeepAction::Peek | PeepAction::Get => {
                let range = range.into();
                state
                    .events
                    .iter()
                    .filter(|entry| is_visible(&entry.raw, range))
                    .take(max)
                    .count()
            }
        }
    }

    fn add_all(&self, events: &[Event]) -> usize {
        let mut added = 0;
        {
            let mut state = self.state.lock();
            for event in events {
                let refs = event.transient_refs();
                if !self.is_enabled(event.raw_type()) {
                    state.transient.release(&refs);
                    continue;
                }
                if state.events.len() >= self.capacity {
                    warn!(
                        capacity = self.capacity,
                        added,
                        "event queue full, bulk add truncated"
                    );
                    break;
                }
                let mut event = *event;
                if event.timestamp() == 0 {
                    event.set_timestamp(self.clock.now_ns());
                }
                state.enqueue(event.encode());
                added += 1;
            }
        }
        if added > 0 {
            self.available.notify_all();
        }
        trace!(count = added, "events added in bulk");
        added
    }

    fn copy_matching(&self, out: &mut [Event], range: EventRange, remove: bool) -> usize {
        if out.is_empty() {
            return 0;
        }
        let mut state = self.state.lock();
        let mut copied = 0;
        let mut index = 0;
        while index < state.events.len() && copied < out.len() {
            let raw = state.events[index].raw;
            if !is_visible(&raw, range) {
                index += 1;
                continue;
            }
            let event = Event::decode(&raw);
            out[copied] = event;
            copied += 1;
            if remove {
                let _ = state.events.remove(index);
                state.transient.retire(&event.transient_refs());
            } else {
                index += 1;
            }
        }
        copied
    }

    /// Discard every queued event of `event_type`. Returns how many went.
    pub fn flush(&self, event_type: impl Into<u32>) -> usize {
        self.flush_group(EventRange::single(event_type.into()))
    }

    /// Discard every queued event whose type lies in `range`.
    pub fn flush_group(&self, range: impl Into<EventRange>) -> usize {
        let range = range.into();
        let mut state = self.state.lock();
        let mut kept = VecDeque::with_capacity(state.events.len());
        let mut flushed = 0;
        for entry in std::mem::take(&mut state.events) {
            if range.contains(entry.raw.event_type()) {
                state.discard(&entry.raw);
                flushed += 1;
            } else {
                kept.push_back(entry);
            }
        }
        state.events = kept;
        if flushed > 0 {
            debug!(range = %range, count = flushed, "events flushed");
        }
        flushed
    }

    // ── Inspection ──────────────────────────────────────────────────

    /// Whether an event of `event_type` is queued.
    pub fn has(&self, event_type: impl Into<u32>) -> bool {
        self.has_group(EventRange::single(event_type.into()))
    }

    /// Whether an event whose type lies in `range` is queued.
    pub fn has_group(&self, range: impl Into<EventRange>) -> bool {
        let range = range.into();
        self.state
            .lock()
            .events
            .iter()
            .any(|entry| is_visible(&entry.raw, range))
    }

    /// Number of events waiting to be retrieved.
    pub fn available(&self) -> usize {
        self.state
            .lock()
            .events
            .iter()
            .filter(|entry| entry.raw.event_type() != SENTINEL)
            .count()
    }

    fn is_drained(&self) -> bool {
        !self
            .state
            .lock()
            .events
            .iter()
            .any(|entry| entry.raw.event_type() != SENTINEL)
    }

    // ── Enable / disable ────────────────────────────────────────────

    /// Enable or disable `event_type`. Disabling also discards queued events
    /// of that type; disabled events never reach the filter or the queue.
    pub fn set_enabled(&self, event_type: impl Into<u32>, enabled: bool) {
        let id = event_type.into();
        let changed = if enabled {
            self.disabled.write().remove(&id)
        } else {
            self.disabled.write().insert(id)
        };
        if changed {
            debug!(event_type = id, enabled, "event type state changed");
        }
        if !enabled {
            let _ = self.flush(id);
        }
    }

    /// Whether `event_type` is enabled. Every type starts enabled.
    pub fn is_enabled(&self, event_type: impl Into<u32>) -> bool {
        !self.disabled.read().contains(&event_type.into())
    }

    // ── Filter and watches ──────────────────────────────────────────

    /// Replace the admission filter and drop queued events it rejects.
    /// `None` removes the filter.
    pub fn set_filter(&self, filter: Option<EventFilter>) {
        self.registry.set_filter(filter.clone());
        if let Some(filter) = filter {
            let _ = self.filter_queued(|event| filter(event));
        }
    }

    /// The installed admission filter.
    pub fn filter(&self) -> Option<EventFilter> {
        self.registry.filter()
    }

    /// Run `keep` once over every queued event, dropping those it rejects.
    /// Nothing is installed. Returns how many events were dropped.
    ///
    /// `keep` runs on a snapshot without the queue lock held, so it may use
    /// the queue. Events stay queued and visible while it runs; only the
    /// rejected ones still queued afterwards are removed.
    pub fn filter_queued(&self, mut keep: impl FnMut(&Event) -> bool) -> usize {
        let _serial = self.registry.serialize();
        let snapshot: Vec<Queued> = self
            .state
            .lock()
            .events
            .iter()
            .filter(|entry| entry.raw.event_type() != SENTINEL)
            .copied()
            .collect();

        // Ascending, since sequence numbers grow along the queue.
        let rejected: Vec<u64> = snapshot
            .iter()
            .filter(|entry| !keep(&Event::decode(&entry.raw)))
            .map(|entry| entry.seq)
            .collect();
        if rejected.is_empty() {
            return 0;
        }

        let mut state = self.state.lock();
        let mut removed = Vec::with_capacity(rejected.len());
        state.events.retain(|entry| {
            let reject = rejected.binary_search(&entry.seq).is_ok();
            if reject {
                removed.push(entry.raw);
            }
            !reject
        });
        for raw in &removed {
            state.discard(raw);
        }
        let dropped = removed.len();
        if dropped > 0 {
            debug!(count = dropped, "queued events filtered out");
        }
        dropped
    }

    /// Install a watch on admitted events.
    pub fn add_watch<F>(&self, watch: F) -> WatchId
    where
        F: Fn(&Event) -> bool + Send + Sync + 'static,
    {
        self.registry.add_watch(watch)
    }

    /// Remove a watch. Returns whether it was installed.
    pub fn remove_watch(&self, id: WatchId) -> bool {
        self.registry.remove_watch(id)
    }

    // ── Custom types ────────────────────────────────────────────────

    /// Reserve `count` consecutive user event types. `None` for `0` or when
    /// the user range is exhausted.
    pub fn register_events(&self, count: u32) -> Option<u32> {
        self.allocator.register(count)
    }

    // ── Transient data ──────────────────────────────────────────────

    /// Store `text` for an event about to be pushed and return its handle.
    ///
    /// The queue frees the data once the event carrying the handle is
    /// dropped or handled. Data for an event that is never pushed stays
    /// until [`unstash`](Self::unstash) is called.
    pub fn stash_text(&self, text: &str) -> TransientRef {
        self.state
            .lock()
            .transient
            .insert(TransientData::Text(Arc::from(text)))
    }

    /// Store a string list for an event about to be pushed. Same lifetime
    /// rules as [`stash_text`](Self::stash_text).
    pub fn stash_list<I, S>(&self, items: I) -> TransientRef
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list: Arc<[Arc<str>]> = items.into_iter().map(|s| Arc::from(s.as_ref())).collect();
        self.state.lock().transient.insert(TransientData::List(list))
    }

    /// Free stashed data whose event will not be pushed. Returns whether the
    /// handle was live.
    pub fn unstash(&self, handle: TransientRef) -> bool {
        self.state.lock().transient.remove(handle).is_some()
    }

    /// Text behind `handle`, while the owning event is being handled.
    pub fn text(&self, handle: TransientRef) -> Option<Arc<str>> {
        match self.state.lock().transient.get(handle)? {
            TransientData::Text(text) => Some(Arc::clone(text)),
            TransientData::List(_) => None,
        }
    }

    /// String list behind `handle`, while the owning event is being handled.
    pub fn list(&self, handle: TransientRef) -> Option<Arc<[Arc<str>]>> {
        match self.state.lock().transient.get(handle)? {
            TransientData::List(list) => Some(Arc::clone(list)),
            TransientData::Text(_) => None,
        }
    }

    /// Number of live transient entries.
    pub fn transient_len(&self) -> usize {
        self.state.lock().transient.len()
    }

    fn release(&self, refs: &[TransientRef]) {
        if !refs.is_empty() {
            self.state.lock().transient.release(refs);
        }
    }

    fn check_owner(&self, operation: &'static str) -> Result<()> {
        if thread::current().id() == self.owner {
            Ok(())
        } else {
            Err(QueueError::WrongThread { operation })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_core::WindowId;
    use sable_events::payloads::{ClipboardEvent, TextInputEvent, WindowEvent};

    fn quiet_queue() -> EventQueue {
        EventQueue::with_settings(&QueueSettings {
            pump_on_poll: false,
            ..QueueSettings::default()
        })
    }

    fn text_input(queue: &EventQueue, text: &str) -> Event {
        Event::TextInput(TextInputEvent {
            window_id: WindowId(1),
            text: queue.stash_text(text),
            ..TextInputEvent::default()
        })
    }

    #[test]
    fn sentinels_are_never_delivered() {
        let queue = quiet_queue();
        assert!(queue.push(&Event::empty(EventType::PollSentinel)).unwrap());
        assert!(queue.push(&Event::empty(EventType::Quit)).unwrap());
        assert_eq!(queue.available(), 1);
        assert!(!queue.has(EventType::PollSentinel));

        let event = queue.poll().unwrap().unwrap();
        assert!(event.is(EventType::Quit));
        assert_eq!(queue.poll().unwrap(), None);
    }

    #[test]
    fn zero_timestamps_are_stamped() {
        let queue = quiet_queue();
        let _ = queue.push(&Event::empty(EventType::Quit)).unwrap();
        let mut explicit = Event::empty(EventType::Quit);
        explicit.set_timestamp(42);
        let _ = queue.push(&explicit).unwrap();

        assert!(queue.poll().unwrap().unwrap().timestamp() > 0);
        assert_eq!(queue.poll().unwrap().unwrap().timestamp(), 42);
    }

    #[test]
    fn transient_text_lives_until_next_poll() {
        let queue = quiet_queue();
        let event = text_input(&queue, "héllo");
        let _ = queue.push(&event).unwrap();

        let polled = queue.poll().unwrap().unwrap();
        let Event::TextInput(input) = polled else {
            panic!("expected text input, got {polled}");
        };
        assert_eq!(queue.text(input.text).as_deref(), Some("héllo"));

        assert_eq!(queue.poll().unwrap(), None);
        assert_eq!(queue.text(input.text), None);
        assert_eq!(queue.transient_len(), 0);
    }

    #[test]
    fn transient_lists_resolve_by_kind() {
        let queue = quiet_queue();
        let handle = queue.stash_list(["text/plain", "text/html"]);
        let list = queue.list(handle).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(&*list[1], "text/html");
        assert_eq!(queue.text(handle), None);

        let event = Event::ClipboardUpdate(ClipboardEvent {
            num_mime_types: 2,
            mime_types: handle,
            ..ClipboardEvent::default()
        });
        assert_eq!(queue.flush(EventType::ClipboardUpdate), 0);
        let _ = queue.push(&event).unwrap();
        assert_eq!(queue.flush(EventType::ClipboardUpdate), 1);
        assert_eq!(queue.list(handle), None);
    }

    #[test]
    fn unpushed_stash_can_be_freed() {
        let queue = quiet_queue();
        let text = queue.stash_text("abandoned");
        let list = queue.stash_list(["a", "b"]);
        assert_eq!(queue.transient_len(), 2);

        assert!(queue.unstash(text));
        assert!(queue.unstash(list));
        assert!(!queue.unstash(text));
        assert!(!queue.unstash(TransientRef::NULL));
        assert_eq!(queue.text(text), None);
        assert_eq!(queue.transient_len(), 0);
    }

    #[test]
    fn dropped_events_release_transient_data() {
        let queue = quiet_queue();
        queue.set_enabled(EventType::TextInput, false);
        let event = text_input(&queue, "gone");
        assert!(!queue.push(&event).unwrap());
        assert_eq!(queue.transient_len(), 0);

        queue.set_enabled(EventType::TextInput, true);
        queue.set_filter(Some(Arc::new(|_: &Event| false)));
        let event = text_input(&queue, "also gone");
        assert!(!queue.push(&event).unwrap());
        assert_eq!(queue.transient_len(), 0);
    }

    #[test]
    fn peep_get_keeps_transient_data_until_next_poll() {
        let queue = quiet_queue();
        let _ = queue.push(&text_input(&queue, "kept")).unwrap();
        let mut buf = [Event::default(); 1];
        assert_eq!(queue.peep(&mut buf, PeepAction::Get, EventType::TextInput), 1);
        let Event::TextInput(input) = buf[0] else {
            panic!("expected text input");
        };
        assert_eq!(queue.text(input.text).as_deref(), Some("kept"));
        let _ = queue.poll().unwrap();
        assert_eq!(queue.text(input.text), None);
    }

    #[test]
    fn peep_size_is_a_dry_run() {
        let queue = quiet_queue();
        for _ in 0..3 {
            let _ = queue.push(&Event::empty(EventType::KeyDown)).unwrap();
        }
        let _ = queue.push(&Event::empty(EventType::MouseMotion)).unwrap();

        assert_eq!(queue.peep_size(10, PeepAction::Peek, EventType::KeyDown), 3);
        assert_eq!(queue.peep_size(2, PeepAction::Get, EventType::KeyDown), 2);
        assert_eq!(queue.peep_size(10, PeepAction::Get, EventRange::ALL), 4);
        assert_eq!(queue.available(), 4);
        assert_eq!(queue.peep_size(7, PeepAction::Add, EventRange::ALL), 7);
    }

    #[test]
    fn peep_add_skips_disabled_types_and_filter() {
        let queue = quiet_queue();
        queue.set_filter(Some(Arc::new(|_: &Event| false)));
        queue.set_enabled(EventType::KeyUp, false);
        let mut batch = [
            Event::empty(EventType::KeyDown),
            Event::empty(EventType::KeyUp),
            Event::empty(EventType::Quit),
        ];
        assert_eq!(queue.peep(&mut batch, PeepAction::Add, EventRange::ALL), 2);
        assert!(queue.has(EventType::KeyDown));
        assert!(!queue.has(EventType::KeyUp));
    }

    #[test]
    fn peep_add_stops_at_capacity() {
        let queue = EventQueue::with_settings(&QueueSettings {
            max_queued_events: 2,
            pump_on_poll: false,
            ..QueueSettings::default()
        });
        let mut batch = [Event::empty(EventType::Quit); 5];
        assert_eq!(queue.peep(&mut batch, PeepAction::Add, EventRange::ALL), 2);
        assert_eq!(queue.peep_size(5, PeepAction::Add, EventRange::ALL), 0);
    }

    #[test]
    fn set_filter_drops_already_queued_rejects() {
        let queue = quiet_queue();
        let _ = queue.push(&Event::empty(EventType::MouseMotion)).unwrap();
        let _ = queue.push(&Event::empty(EventType::KeyDown)).unwrap();
        queue.set_filter(Some(Arc::new(|e: &Event| !e.is(EventType::MouseMotion))));
        assert!(!queue.has(EventType::MouseMotion));
        assert!(queue.has(EventType::KeyDown));
        assert!(queue.filter().is_some());
    }

    #[test]
    fn filter_queued_preserves_order() {
        let queue = quiet_queue();
        for width in 1..=4 {
            let event = Event::WindowResized(WindowEvent {
                window_id: WindowId(1),
                data1: width,
                ..WindowEvent::default()
            });
            let _ = queue.push(&event).unwrap();
        }
        let dropped = queue.filter_queued(|e| match e {
            Event::WindowResized(w) => w.data1 % 2 == 0,
            _ => true,
        });
        assert_eq!(dropped, 2);
        assert!(queue.filter().is_none());

        let widths: Vec<i32> = std::iter::from_fn(|| queue.poll().unwrap())
            .map(|e| match e {
                Event::WindowResized(w) => w.data1,
                _ => -1,
            })
            .collect();
        assert_eq!(widths, vec![2, 4]);
    }

    #[test]
    fn queued_events_stay_visible_while_filtering() {
        let queue = quiet_queue();
        let _ = queue.push(&Event::empty(EventType::KeyDown)).unwrap();
        let _ = queue.push(&Event::empty(EventType::Quit)).unwrap();

        let mut seen = Vec::new();
        let dropped = queue.filter_queued(|_| {
            seen.push((queue.has(EventType::KeyDown), queue.available()));
            true
        });
        assert_eq!(dropped, 0);
        assert_eq!(seen, vec![(true, 2), (true, 2)]);
    }

    #[test]
    fn disabling_while_filtering_sticks() {
        let queue = quiet_queue();
        let _ = queue.push(&Event::empty(EventType::KeyDown)).unwrap();
        let _ = queue.push(&Event::empty(EventType::Quit)).unwrap();

        let dropped = queue.filter_queued(|event| {
            if event.is(EventType::KeyDown) {
                queue.set_enabled(EventType::KeyDown, false);
            }
            !event.is(EventType::Quit)
        });
        assert_eq!(dropped, 1);
        assert!(!queue.is_enabled(EventType::KeyDown));
        assert!(!queue.has(EventType::KeyDown));
        assert_eq!(queue.available(), 0);
    }

    #[test]
    fn capacity_holds_while_filtering() {
        let queue = EventQueue::with_settings(&QueueSettings {
            max_queued_events: 2,
            pump_on_poll: false,
            ..QueueSettings::default()
        });
        let _ = queue.push(&Event::empty(EventType::KeyDown)).unwrap();
        let _ = queue.push(&Event::empty(EventType::KeyUp)).unwrap();

        let mut rejected_pushes = 0;
        let _ = queue.filter_queued(|_| {
            if matches!(
                queue.push(&Event::empty(EventType::Quit)),
                Err(QueueError::QueueFull { .. })
            ) {
                rejected_pushes += 1;
            }
            true
        });
        assert_eq!(rejected_pushes, 2);
        assert_eq!(queue.available(), 2);
    }

    #[test]
    fn events_pushed_while_filtering_are_kept_in_order() {
        let queue = quiet_queue();
        let _ = queue.push(&Event::empty(EventType::KeyDown)).unwrap();
        let _ = queue.push(&Event::empty(EventType::KeyUp)).unwrap();

        let dropped = queue.filter_queued(|event| {
            if event.is(EventType::KeyDown) {
                let _ = queue.push(&Event::empty(EventType::Quit)).unwrap();
            }
            !event.is(EventType::KeyDown)
        });
        assert_eq!(dropped, 1);
        assert!(queue.poll().unwrap().unwrap().is(EventType::KeyUp));
        assert!(queue.poll().unwrap().unwrap().is(EventType::Quit));
        assert_eq!(queue.poll().unwrap(), None);
    }

    #[test]
    fn disabling_flushes_queued_events() {
        let queue = quiet_queue();
        let _ = queue.push(&Event::empty(EventType::KeyDown)).unwrap();
        let _ = queue.push(&Event::empty(EventType::KeyUp)).unwrap();
        queue.set_enabled(EventType::KeyDown, false);
        assert!(!queue.is_enabled(EventType::KeyDown));
        assert!(!queue.has(EventType::KeyDown));
        assert!(queue.has(EventType::KeyUp));
        queue.set_enabled(EventType::KeyDown, true);
        assert!(queue.push(&Event::empty(EventType::KeyDown)).unwrap());
    }

    #[test]
    fn push_bytes_checks_length() {
        let queue = quiet_queue();
        assert!(matches!(
            queue.push_bytes(&[0; 10]),
            Err(QueueError::Codec(_))
        ));
        let raw = Event::empty(EventType::Quit).encode();
        assert!(queue.push_bytes(raw.as_bytes()).unwrap());
        assert!(queue.has(EventType::Quit));
    }
}
