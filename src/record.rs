// src/record.rs
//! The interaction record: one (sender, receiver, time) triple.

use serde::{Deserialize, Serialize};

/// A user identifier from the communication log.
pub type UserId = u32;

/// A send time in the log's own units (seconds).
pub type Timestamp = u64;

/// One email interaction: `sender` emailed `receiver` at `time`.
///
/// Records are immutable values created at parse time or when slicing an
/// existing snapshot. Sequences of records are ordered by timestamp; ties
/// keep their relative order under a stable sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub sender: UserId,
    pub receiver: UserId,
    pub time: Timestamp,
}

impl Interaction {
    #[must_use]
    pub fn new(sender: UserId, receiver: UserId, time: Timestamp) -> Self {
        Self {
            sender,
            receiver,
            time,
        }
    }
}
