// src/graph/queries.rs
//! Read-only reporting queries over one snapshot.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::snapshot::Snapshot;
use crate::record::{Timestamp, UserId};
use crate::types::{ActivityReport, Direction, UserReport};

/// Number of emails from `sender` to `receiver`; 0 when either id is
/// absent from the snapshot.
#[must_use]
#[allow(clippy::indexing_slicing)] // Guarded: indices come from the snapshot's own index
pub fn email_count(snapshot: &Snapshot, sender: UserId, receiver: UserId) -> u32 {
    match (
        snapshot.index.index_of(sender),
        snapshot.index.index_of(receiver),
    ) {
        (Some(i), Some(j)) => snapshot.matrix[i][j],
        _ => 0,
    }
}

/// Builds the time-filtered snapshot for `[start, end]` and scans its
/// matrix. A sender or receiver counts once the first time its row or
/// column shows a positive entry; the total sums all positive entries.
pub fn activity_in_window(
    snapshot: &Snapshot,
    start: Timestamp,
    end: Timestamp,
) -> Result<ActivityReport> {
    let filtered = snapshot.filter_by_time(start, end)?;

    let mut senders = HashSet::new();
    let mut receivers = HashSet::new();
    let mut total = 0_usize;

    for (i, row) in filtered.matrix.iter().enumerate() {
        for (j, &weight) in row.iter().enumerate() {
            if weight > 0 {
                senders.insert(i);
                receivers.insert(j);
                total += weight as usize;
            }
        }
    }

    Ok(ActivityReport {
        senders: senders.len(),
        receivers: receivers.len(),
        total,
    })
}

/// Sums `user`'s row for sent and column for received; unique contacts
/// accumulate in a single set across both scans, so a partner met on the
/// row is not re-counted on the column.
#[must_use]
#[allow(clippy::indexing_slicing)] // Guarded: idx comes from the snapshot's own index
pub fn report_on_user(snapshot: &Snapshot, user: UserId) -> UserReport {
    let Some(idx) = snapshot.index.index_of(user) else {
        return UserReport::default();
    };

    let mut contacts: HashSet<usize> = HashSet::new();
    let mut sent = 0_usize;
    let mut received = 0_usize;

    for (j, &weight) in snapshot.matrix[idx].iter().enumerate() {
        sent += weight as usize;
        if weight > 0 {
            contacts.insert(j);
        }
    }
    for (i, row) in snapshot.matrix.iter().enumerate() {
        let weight = row[idx];
        received += weight as usize;
        if weight > 0 {
            contacts.insert(i);
        }
    }

    UserReport {
        sent,
        received,
        unique_contacts: contacts.len(),
    }
}

/// Id of the `rank`-th most active user: per-user totals are computed for
/// the given direction, the current maximum is masked out `rank - 1`
/// times, and the next maximum wins. Returns `None` for rank 0, an empty
/// graph, or when the ranked total is zero.
#[must_use]
#[allow(clippy::indexing_slicing)] // Guarded: winner indices come from scans of `totals`
pub fn nth_most_active(snapshot: &Snapshot, rank: usize, direction: Direction) -> Option<UserId> {
    if snapshot.is_empty() || rank == 0 {
        return None;
    }

    let mut totals = direction_totals(snapshot, direction);
    for _ in 1..rank {
        if let Some(winner) = current_max(&totals) {
            totals[winner] = i64::MIN;
        }
    }

    let winner = current_max(&totals)?;
    if totals[winner] <= 0 {
        return None;
    }
    snapshot.index.user_at(winner)
}

#[allow(clippy::indexing_slicing)] // Guarded: i and j index the square matrix
fn direction_totals(snapshot: &Snapshot, direction: Direction) -> Vec<i64> {
    let mut totals = vec![0_i64; snapshot.len()];
    for (i, row) in snapshot.matrix.iter().enumerate() {
        for (j, &weight) in row.iter().enumerate() {
            match direction {
                Direction::Send => totals[i] += i64::from(weight),
                Direction::Receive => totals[j] += i64::from(weight),
            }
        }
    }
    totals
}

/// Index of the maximum, scanning ascending with a strict comparison so
/// ties resolve to the lowest index, which holds the smallest user id.
#[allow(clippy::indexing_slicing)] // Guarded: best always holds a seen index
fn current_max(totals: &[i64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &total) in totals.iter().enumerate() {
        match best {
            Some(b) if totals[b] >= total => {}
            _ => best = Some(i),
        }
    }
    best
}
