//! Storage behind [`TransientRef`] handles.
//!
//! Each handle belongs to one queued event. Its data is released when the
//! event is dropped (disabled, filtered out, flushed, over capacity) or, for
//! events handed to the caller, at the start of the next `poll`/`wait`.

use std::collections::HashMap;
use std::sync::Arc;

use sable_events::TransientRef;

/// Variable-length data referenced from an event payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransientData {
    /// UTF-8 text (input text, drop path, ...).
    Text(Arc<str>),
    /// List of strings (editing candidates, MIME types).
    List(Arc<[Arc<str>]>),
}

#[derive(Debug, Default)]
pub(crate) struct TransientStore {
    entries: HashMap<u64, TransientData>,
    retired: Vec<TransientRef>,
    last: u64,
}

impl TransientStore {
    pub(crate) fn insert(&mut self, data: TransientData) -> TransientRef {
        loop {
            self.last = self.last.wrapping_add(1);
            if self.last != 0 && !self.entries.contains_key(&self.last) {
                break;
            }
        }
        let _ = self.entries.insert(self.last, data);
        TransientRef::from_raw(self.last)
    }

    pub(crate) fn get(&self, handle: TransientRef) -> Option<&TransientData> {
        self.entries.get(&handle.raw())
    }

    pub(crate) fn remove(&mut self, handle: TransientRef) -> Option<TransientData> {
        self.entries.remove(&handle.raw())
    }

    pub(crate) fn release(&mut self, handles: &[TransientRef]) {
        for handle in handles {
            let _ = self.entries.remove(&handle.raw());
        }
    }

    /// Keep `handles` alive until the next [`release_retired`](Self::release_retired).
    pub(crate) fn retire(&mut self, handles: &[TransientRef]) {
        self.retired.extend_from_slice(handles);
    }

    pub(crate) fn release_retired(&mut self) {
        let retired = std::mem::take(&mut self.retired);
        self.release(&retired);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
