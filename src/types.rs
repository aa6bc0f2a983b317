// src/types.rs
use serde::Serialize;

/// Which side of an interaction a ranking considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Rank users by emails sent (row sums).
    Send,
    /// Rank users by emails received (column sums).
    Receive,
}

/// Aggregate activity inside one time window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityReport {
    /// Distinct users that sent at least one email in the window.
    pub senders: usize,
    /// Distinct users that received at least one email in the window.
    pub receivers: usize,
    /// Total number of emails in the window.
    pub total: usize,
}

impl ActivityReport {
    /// Returns `true` when the window held no traffic at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// One user's transaction history inside a snapshot.
///
/// All three fields are zero when the user id is absent from the snapshot;
/// callers distinguish that from a present-but-silent user only by the
/// membership query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub sent: usize,
    pub received: usize,
    /// Distinct partners across both directions, each counted once.
    pub unique_contacts: usize,
}

impl UserReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sent == 0 && self.received == 0
    }
}
