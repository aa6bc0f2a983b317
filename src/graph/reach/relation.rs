// src/graph/reach/relation.rs
//! Relation-existence check: can a chain of emails link two users?

use std::collections::HashSet;

use crate::graph::snapshot::Snapshot;
use crate::record::UserId;

/// Outcome of one probe branch. `Blocked` marks a branch that cannot
/// reach the target; the explicit tag stands in for a reserved marker
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Found,
    Blocked,
}

/// Returns `true` if a chain of emails links `start` to `end`; `false`
/// when either id is absent.
///
/// The probe records a node in the searched set only when expanding one
/// of its still-unsearched successors, and the set is shared across
/// sibling branches. Cyclic graphs can therefore re-explore branches that
/// a global visited set would prune; that redundancy is an accepted cost,
/// and the yes/no answer here is the precondition both path searches rely
/// on.
#[must_use]
pub fn path_exists(snapshot: &Snapshot, start: UserId, end: UserId) -> bool {
    if !snapshot.contains_user(start) || !snapshot.contains_user(end) {
        return false;
    }
    let mut searched = HashSet::new();
    probe(snapshot, start, end, start, &mut searched, true) == Probe::Found
}

fn probe(
    snapshot: &Snapshot,
    start: UserId,
    end: UserId,
    current: UserId,
    searched: &mut HashSet<UserId>,
    first: bool,
) -> Probe {
    if current == end {
        return Probe::Found;
    }
    // Coming back around to the start means this branch looped.
    if current == start && !first {
        return Probe::Blocked;
    }

    for &next in snapshot.successors_of(current) {
        if !searched.contains(&next) {
            searched.insert(current);
            if probe(snapshot, start, end, next, searched, false) == Probe::Found {
                return Probe::Found;
            }
        }
    }
    Probe::Blocked
}
