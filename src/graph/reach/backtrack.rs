// src/graph/reach/backtrack.rs
//! Single-path backtracking search.
//!
//! A depth-first walk that recovers its backtracking target from the
//! recorded path history instead of a call stack: when the current node
//! has no usable successor it is marked dead, and the walk resumes from
//! the most recently appended path element still alive. The emitted path
//! keeps every dead end it walked through.

use std::collections::HashSet;

use crate::graph::reach::relation;
use crate::graph::snapshot::Snapshot;
use crate::record::UserId;

/// Path from `start` to `target` in walk order, dead ends included, or
/// `None` when either id is absent or no chain of emails links the two.
#[must_use]
pub fn search(snapshot: &Snapshot, start: UserId, target: UserId) -> Option<Vec<UserId>> {
    if !snapshot.contains_user(start)
        || !snapshot.contains_user(target)
        || !relation::path_exists(snapshot, start, target)
    {
        return None;
    }

    let mut path = vec![start];
    let mut dead: HashSet<UserId> = HashSet::new();
    let mut current = start;

    loop {
        if let Some(next) = advance(snapshot, &path, current, target) {
            path.push(next);
            if next == target {
                return Some(path);
            }
            current = next;
            continue;
        }

        dead.insert(current);
        // The dead set strictly grows, so this loop terminates even
        // though the path history never shrinks.
        match path.iter().rev().find(|user| !dead.contains(user)) {
            Some(&live) => current = live,
            None => return None,
        }
    }
}

/// First successor of `current` worth taking, in ascending id order: the
/// target itself, or the first successor not already on the path.
fn advance(snapshot: &Snapshot, path: &[UserId], current: UserId, target: UserId) -> Option<UserId> {
    for &next in snapshot.successors_of(current) {
        if next == target || !path.contains(&next) {
            return Some(next);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Interaction;

    fn snap(edges: &[(UserId, UserId)]) -> Snapshot {
        let records = edges
            .iter()
            .enumerate()
            .map(|(i, &(s, r))| Interaction::new(s, r, i as u64))
            .collect();
        Snapshot::from_records(records)
    }

    #[test]
    fn walks_the_lowest_id_branch_first() {
        // 1 -> {2, 3}; the 2-branch reaches 4, so 3 is never visited.
        let snapshot = snap(&[(1, 2), (1, 3), (2, 4)]);
        assert_eq!(search(&snapshot, 1, 4), Some(vec![1, 2, 4]));
    }

    #[test]
    fn dead_ends_stay_in_the_emitted_path() {
        // 1 -> {2, 4}, 2 -> {3}, 3 is a dead end, 4 -> {6}. The walk
        // exhausts 3, backtracks through 2 to 1, then takes 4.
        let snapshot = snap(&[(1, 2), (1, 4), (2, 3), (4, 6)]);
        assert_eq!(search(&snapshot, 1, 6), Some(vec![1, 2, 3, 4, 6]));
    }

    #[test]
    fn self_loop_reaches_itself() {
        let snapshot = snap(&[(7, 7), (7, 8)]);
        assert_eq!(search(&snapshot, 7, 7), Some(vec![7, 7]));
    }

    #[test]
    fn target_beats_path_membership() {
        // 1 -> 2 -> 1 with target 1: the cycle edge closes the path even
        // though 1 is already on it.
        let snapshot = snap(&[(1, 2), (2, 1)]);
        assert_eq!(search(&snapshot, 1, 1), Some(vec![1, 2, 1]));
    }
}
