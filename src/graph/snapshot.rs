// src/graph/snapshot.rs
//! The immutable graph store and its read-only query surface.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::index::UserIndex;
use crate::graph::{breach, builder, queries, reach};
use crate::record::{Interaction, Timestamp, UserId};
use crate::types::{ActivityReport, Direction, UserReport};

/// A directed weighted interaction graph derived from one record sequence.
///
/// Built once and never mutated; every filtering operation produces an
/// independent new snapshot with no shared structure. Invariants: the
/// matrix is square, and `index.len() == matrix.len() == successors.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub(crate) index: UserIndex,
    /// `matrix[i][j]` = number of emails from `users()[i]` to `users()[j]`.
    pub(crate) matrix: Vec<Vec<u32>>,
    /// The retained records, exact relative order preserved.
    pub(crate) records: Vec<Interaction>,
    /// `successors[i]` = ids `users()[i]` has emailed, ascending.
    pub(crate) successors: Vec<Vec<UserId>>,
}

impl Snapshot {
    /// Builds a snapshot from a record sequence ordered by timestamp
    /// (ties in input order).
    #[must_use]
    pub fn from_records(records: Vec<Interaction>) -> Self {
        builder::build(records)
    }

    /// Builds a snapshot restricted to the `[start, end]` time window.
    ///
    /// Equivalent to [`Snapshot::from_records`] followed by
    /// [`Snapshot::filter_by_time`]; the filter never special-cases the
    /// source of the records.
    pub fn from_records_in_window(
        records: Vec<Interaction>,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Self> {
        builder::build(records).filter_by_time(start, end)
    }

    /// Derives a new snapshot retaining the records with
    /// `start <= time <= end`. Rejects `start > end`.
    pub fn filter_by_time(&self, start: Timestamp, end: Timestamp) -> Result<Self> {
        builder::filter_by_time(self, start, end)
    }

    /// Derives a new snapshot retaining the records where the sender or
    /// the receiver (or both) is one of `ids`.
    #[must_use]
    pub fn filter_by_users(&self, ids: &[UserId]) -> Self {
        builder::filter_by_users(self, ids)
    }

    /// The set of user ids present in this snapshot.
    #[must_use]
    pub fn user_ids(&self) -> BTreeSet<UserId> {
        self.index.users().iter().copied().collect()
    }

    /// User ids in matrix-index order (ascending).
    #[must_use]
    pub fn users(&self) -> &[UserId] {
        self.index.users()
    }

    /// Number of users in this snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn contains_user(&self, user: UserId) -> bool {
        self.index.contains(user)
    }

    /// The retained records, in their original relative order.
    #[must_use]
    pub fn records(&self) -> &[Interaction] {
        &self.records
    }

    /// Users `user` has emailed, in ascending id order. Empty when `user`
    /// is absent or has sent nothing.
    #[must_use]
    pub fn successors_of(&self, user: UserId) -> &[UserId] {
        self.index
            .index_of(user)
            .map_or(&[], |i| self.successors[i].as_slice())
    }

    /// Number of emails from `sender` to `receiver`; 0 when either id is
    /// absent from this snapshot.
    #[must_use]
    pub fn email_count(&self, sender: UserId, receiver: UserId) -> u32 {
        queries::email_count(self, sender, receiver)
    }

    /// Distinct senders, distinct receivers, and total email count for the
    /// `[start, end]` window.
    pub fn report_activity_in_window(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<ActivityReport> {
        queries::activity_in_window(self, start, end)
    }

    /// Sent, received, and unique-contact totals for `user`; all zeros when
    /// `user` is absent.
    #[must_use]
    pub fn report_on_user(&self, user: UserId) -> UserReport {
        queries::report_on_user(self, user)
    }

    /// Id of the `rank`-th most active user in the given direction, ties
    /// resolving to the smaller id. `None` when no user qualifies.
    #[must_use]
    pub fn nth_most_active(&self, rank: usize, direction: Direction) -> Option<UserId> {
        queries::nth_most_active(self, rank, direction)
    }

    /// Layered frontier-order search path from `start` to `target`.
    #[must_use]
    pub fn bfs_path(&self, start: UserId, target: UserId) -> Option<Vec<UserId>> {
        reach::frontier::search(self, start, target)
    }

    /// Single-path backtracking search path from `start` to `target`.
    #[must_use]
    pub fn dfs_path(&self, start: UserId, target: UserId) -> Option<Vec<UserId>> {
        reach::backtrack::search(self, start, target)
    }

    /// Returns `true` if a chain of emails links `start` to `target`.
    #[must_use]
    pub fn path_exists(&self, start: UserId, target: UserId) -> bool {
        reach::relation::path_exists(self, start, target)
    }

    /// Maximum number of users one seeded email can infect within `hours`.
    #[must_use]
    pub fn max_breached_user_count(&self, hours: u32) -> usize {
        breach::max_breached_user_count(self, hours)
    }
}
