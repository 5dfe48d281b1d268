//! Allocation of application-defined event types from the user range.

use std::sync::atomic::{AtomicU32, Ordering};

use sable_events::{LAST_EVENT, USER_EVENT_FIRST};
use tracing::{debug, warn};

/// Monotonic allocator over the user identifier range.
///
/// Ranges are never freed. An allocation succeeds while the cursor plus the
/// requested count stays at or below [`LAST_EVENT`].
#[derive(Debug)]
pub struct CustomTypeAllocator {
    next: AtomicU32,
}

impl Default for CustomTypeAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomTypeAllocator {
    /// An allocator whose first allocation starts at [`USER_EVENT_FIRST`].
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(USER_EVENT_FIRST),
        }
    }

    /// Reserve `count` consecutive identifiers and return the first.
    ///
    /// Returns `None` for `count == 0` or when the range is exhausted.
    pub fn register(&self, count: u32) -> Option<u32> {
        if count == 0 {
            return None;
        }
        let result = self
            .next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |next| {
                next.checked_add(count).filter(|end| *end <= LAST_EVENT)
            });
        match result {
            Ok(base) => {
                debug!(base, count, "custom event types registered");
                Some(base)
            }
            Err(next) => {
                warn!(
                    count,
                    remaining = LAST_EVENT - next,
                    "custom event type range exhausted"
                );
                None
            }
        }
    }

    /// Identifiers still available.
    pub fn remaining(&self) -> u32 {
        LAST_EVENT - self.next.load(Ordering::Acquire)
    }
}
