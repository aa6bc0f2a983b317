// tests/unit_breach.rs
//! Tests for the breach-propagation simulation.

use mailgraph_core::{Interaction, Snapshot, Timestamp, UserId};

fn snap(triples: &[(UserId, UserId, Timestamp)]) -> Snapshot {
    Snapshot::from_records(
        triples
            .iter()
            .map(|&(s, r, t)| Interaction::new(s, r, t))
            .collect(),
    )
}

/// Five users relayed one hop per window step, seed firing at t = 3600.
fn hourly_chain() -> Snapshot {
    snap(&[
        (1, 2, 3600),
        (2, 3, 7200),
        (3, 4, 14400),
        (4, 5, 25200),
    ])
}

#[test]
fn six_hour_window_breaches_the_whole_chain() {
    // Deadline 3600 + 6 * 3600 = 25200 includes the final relay.
    assert_eq!(hourly_chain().max_breached_user_count(6), 5);
}

#[test]
fn five_hour_window_stops_one_relay_short() {
    assert_eq!(hourly_chain().max_breached_user_count(5), 4);
}

#[test]
fn deadline_is_inclusive() {
    let snapshot = snap(&[(1, 2, 0), (2, 3, 3600), (3, 4, 7200)]);
    // Seeded at t = 0, the record at exactly t = 3600 still propagates.
    assert_eq!(snapshot.max_breached_user_count(1), 3);
    assert_eq!(snapshot.max_breached_user_count(2), 4);
}

#[test]
fn same_instant_records_propagate_transitively() {
    // Chain listed in reverse order within one instant; only a fixed
    // point over the group infects all four users.
    let snapshot = snap(&[(3, 4, 100), (2, 3, 100), (1, 2, 100)]);
    assert_eq!(snapshot.max_breached_user_count(2), 4);
}

#[test]
fn co_timed_seeds_are_tried_independently() {
    // Two disjoint pairs at the same instant; each seed infects its own
    // pair only.
    let snapshot = snap(&[(1, 2, 100), (3, 4, 100)]);
    assert_eq!(snapshot.max_breached_user_count(4), 2);
}

#[test]
fn later_anchors_can_beat_the_earliest_seed() {
    // Seeding at t = 7200 catches the dense burst; seeding at t = 0 only
    // reaches user 2 before the window closes.
    let snapshot = snap(&[
        (1, 2, 0),
        (5, 6, 7200),
        (6, 7, 9000),
        (7, 8, 10000),
    ]);
    assert_eq!(snapshot.max_breached_user_count(1), 4);
}

#[test]
fn empty_snapshot_breaches_nobody() {
    assert_eq!(snap(&[]).max_breached_user_count(10), 0);
}

#[test]
fn zero_window_propagates_only_within_the_instant() {
    let snapshot = snap(&[(1, 2, 50), (2, 3, 50), (3, 4, 3650)]);
    assert_eq!(snapshot.max_breached_user_count(0), 3);
}
