//! Handles to producer-owned transient data.
//!
//! Payload fields that refer to variable-length data (input text, drop
//! paths, clipboard MIME types) hold a [`TransientRef`] in the 8-byte pointer
//! slot of the external record. The data itself lives in the queue's
//! transient store and is only valid while the event is being handled;
//! callers that need it longer must copy it out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to transient data owned by an event queue. `0` is null.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransientRef(u64);

impl TransientRef {
    /// The null handle: the field carries no data.
    pub const NULL: Self = Self(0);

    /// Wrap a raw handle value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw handle value as stored in the external record.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether the handle is null.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TransientRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("null")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}
