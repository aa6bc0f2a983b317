// src/graph/breach.rs
//! Worst-case breach propagation inside a time window.

use std::collections::HashSet;

use crate::graph::snapshot::Snapshot;
use crate::record::{Interaction, Timestamp, UserId};

const SECONDS_PER_HOUR: u64 = 3600;

/// Maximum number of users a single seeded email can infect within
/// `hours` of its send time.
///
/// Every distinct timestamp anchors a window, and every record at that
/// timestamp seeds one trial with its sender infected. The trial replays
/// records in timestamp order through the window, deadline inclusive;
/// records sharing an instant propagate to a fixed point, since same-
/// instant spread is simultaneous but transitive. The result is the
/// largest infected set over all trials, or 0 with no records.
#[must_use]
pub fn max_breached_user_count(snapshot: &Snapshot, hours: u32) -> usize {
    let mut timeline: Vec<Interaction> = snapshot.records().to_vec();
    timeline.sort_by_key(|record| record.time);

    let groups = group_by_time(&timeline);
    let window = u64::from(hours) * SECONDS_PER_HOUR;

    let mut max_infected = 0;
    for (anchor, &(start_time, seeds)) in groups.iter().enumerate() {
        let deadline = start_time.saturating_add(window);
        for seed in seeds {
            let mut infected: HashSet<UserId> = HashSet::new();
            infected.insert(seed.sender);

            for &(time, group) in &groups[anchor..] {
                if time > deadline {
                    break;
                }
                propagate_instant(group, &mut infected);
            }
            max_infected = max_infected.max(infected.len());
        }
    }
    max_infected
}

/// Splits the time-sorted record list into runs sharing one timestamp.
fn group_by_time(timeline: &[Interaction]) -> Vec<(Timestamp, &[Interaction])> {
    let mut groups = Vec::new();
    let mut start = 0;
    while start < timeline.len() {
        let time = timeline[start].time;
        let end = start + timeline[start..].partition_point(|record| record.time == time);
        groups.push((time, &timeline[start..end]));
        start = end;
    }
    groups
}

/// Applies "an infected sender infects its receiver" over the records of
/// one instant until the infected set stops growing.
fn propagate_instant(group: &[Interaction], infected: &mut HashSet<UserId>) {
    loop {
        let before = infected.len();
        for record in group {
            if infected.contains(&record.sender) {
                infected.insert(record.receiver);
            }
        }
        if infected.len() == before {
            break;
        }
    }
}
