//! Admission filter and event watches.
//!
//! The registry is an ordinary object injected into a queue, not process
//! state. Callbacks may run on whichever thread pushes an event; the registry
//! serializes invocation so no two of its callbacks ever run concurrently.
//! Invocation happens outside the bookkeeping lock, so a callback may push
//! events or add and remove watches without deadlocking.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, ReentrantMutexGuard};
use sable_events::Event;
use tracing::debug;

/// Callback deciding whether an event is admitted (`true`) or dropped.
///
/// Watches use the same signature; their return value is ignored.
pub type EventFilter = Arc<dyn Fn(&Event) -> bool + Send + Sync>;

/// Identity of an installed watch, used to remove it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchId(u64);

impl fmt::Display for WatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "watch-{}", self.0)
    }
}

#[derive(Default)]
struct Entries {
    filter: Option<EventFilter>,
    watches: Vec<(WatchId, EventFilter)>,
    next_watch: u64,
}

/// One replaceable admission filter plus any number of watches.
#[derive(Default)]
pub struct FilterRegistry {
    dispatch: ReentrantMutex<()>,
    entries: Mutex<Entries>,
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.lock();
        f.debug_struct("FilterRegistry")
            .field("has_filter", &entries.filter.is_some())
            .field("watches", &entries.watches.len())
            .finish()
    }
}

impl FilterRegistry {
    /// An empty registry: every event is admitted, nothing is watched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the admission filter. `None` removes it.
    pub fn set_filter(&self, filter: Option<EventFilter>) {
        debug!(installed = filter.is_some(), "event filter replaced");
        self.entries.lock().filter = filter;
    }

    /// The installed admission filter, for callers that want to chain it.
    pub fn filter(&self) -> Option<EventFilter> {
        self.entries.lock().filter.clone()
    }

    /// Install a watch. Watches see every admitted event.
    pub fn add_watch<F>(&self, watch: F) -> WatchId
    where
        F: Fn(&Event) -> bool + Send + Sync + 'static,
    {
        let mut entries = self.entries.lock();
        entries.next_watch += 1;
        let id = WatchId(entries.next_watch);
        entries.watches.push((id, Arc::new(watch)));
        debug!(watch = %id, total = entries.watches.len(), "event watch added");
        id
    }

    /// Remove a watch. Returns whether it was installed.
    pub fn remove_watch(&self, id: WatchId) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.watches.len();
        entries.watches.retain(|(watch_id, _)| *watch_id != id);
        let removed = entries.watches.len() != before;
        debug!(watch = %id, removed, "event watch removed");
        removed
    }

    /// Number of installed watches.
    pub fn watch_count(&self) -> usize {
        self.entries.lock().watches.len()
    }

    /// Run the admission filter. `true` when no filter is installed.
    pub fn admits(&self, event: &Event) -> bool {
        let Some(filter) = self.filter() else {
            return true;
        };
        let _serial = self.dispatch.lock();
        filter(event)
    }

    /// Run every watch on `event`, in installation order.
    pub fn notify_watches(&self, event: &Event) {
        let watches: Vec<EventFilter> = {
            let entries = self.entries.lock();
            if entries.watches.is_empty() {
                return;
            }
            entries.watches.iter().map(|(_, w)| Arc::clone(w)).collect()
        };
        let _serial = self.dispatch.lock();
        for watch in watches {
            let _ = watch(event);
        }
    }

    /// Hold the invocation lock while running callbacks outside the registry.
    pub(crate) fn serialize(&self) -> ReentrantMutexGuard<'_, ()> {
        self.dispatch.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_events::EventType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn no_filter_admits_everything() {
        let registry = FilterRegistry::new();
        assert!(registry.admits(&Event::empty(EventType::Quit)));
        assert!(registry.filter().is_none());
    }

    #[test]
    fn filter_is_replaced() {
        let registry = FilterRegistry::new();
        registry.set_filter(Some(Arc::new(|_: &Event| false)));
        assert!(!registry.admits(&Event::empty(EventType::Quit)));
        registry.set_filter(Some(Arc::new(|e: &Event| e.is(EventType::Quit))));
        assert!(registry.admits(&Event::empty(EventType::Quit)));
        assert!(!registry.admits(&Event::empty(EventType::KeyDown)));
        registry.set_filter(None);
        assert!(registry.admits(&Event::empty(EventType::KeyDown)));
    }

    #[test]
    fn installed_filter_can_be_chained() {
        let registry = FilterRegistry::new();
        registry.set_filter(Some(Arc::new(|e: &Event| !e.is(EventType::MouseMotion))));
        let previous = registry.filter().unwrap();
        registry.set_filter(Some(Arc::new(move |e: &Event| {
            previous(e) && !e.is(EventType::KeyDown)
        })));
        assert!(!registry.admits(&Event::empty(EventType::MouseMotion)));
        assert!(!registry.admits(&Event::empty(EventType::KeyDown)));
        assert!(registry.admits(&Event::empty(EventType::KeyUp)));
    }

    #[test]
    fn watches_run_and_are_removed_by_identity() {
        let registry = FilterRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h1 = Arc::clone(&hits);
        let h2 = Arc::clone(&hits);
        let first = registry.add_watch(move |_| {
            let _ = h1.fetch_add(1, Ordering::SeqCst);
            false
        });
        let _second = registry.add_watch(move |_| {
            let _ = h2.fetch_add(10, Ordering::SeqCst);
            true
        });

        registry.notify_watches(&Event::empty(EventType::Quit));
        assert_eq!(hits.load(Ordering::SeqCst), 11);

        assert!(registry.remove_watch(first));
        assert!(!registry.remove_watch(first));
        registry.notify_watches(&Event::empty(EventType::Quit));
        assert_eq!(hits.load(Ordering::SeqCst), 21);
        assert_eq!(registry.watch_count(), 1);
    }

    #[test]
    fn watch_may_edit_the_registry() {
        let registry = Arc::new(FilterRegistry::new());
        let inner = Arc::clone(&registry);
        let _ = registry.add_watch(move |_| {
            let _ = inner.add_watch(|_| true);
            true
        });
        registry.notify_watches(&Event::empty(EventType::Quit));
        assert_eq!(registry.watch_count(), 2);
    }

    #[test]
    fn callbacks_never_overlap() {
        let registry = Arc::new(FilterRegistry::new());
        let running = Arc::new(AtomicUsize::new(0));
        let overlaps = Arc::new(AtomicUsize::new(0));
        {
            let running = Arc::clone(&running);
            let overlaps = Arc::clone(&overlaps);
            let _ = registry.add_watch(move |_| {
                if running.fetch_add(1, Ordering::SeqCst) != 0 {
                    let _ = overlaps.fetch_add(1, Ordering::SeqCst);
                }
                std::thread::yield_now();
                let _ = running.fetch_sub(1, Ordering::SeqCst);
                true
            });
        }

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        registry.notify_watches(&Event::empty(EventType::Quit));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(overlaps.load(Ordering::SeqCst), 0);
    }
}
