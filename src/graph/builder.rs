// src/graph/builder.rs
//! Snapshot construction: index, matrix, and successor-list derivation,
//! plus the filtered-derivation constructors.

use std::collections::HashSet;

use crate::error::{GraphError, Result};
use crate::graph::index::UserIndex;
use crate::graph::snapshot::Snapshot;
use crate::record::{Interaction, Timestamp, UserId};

/// Builds a snapshot from the retained records.
#[must_use]
pub fn build(records: Vec<Interaction>) -> Snapshot {
    let index = UserIndex::from_records(&records);
    let matrix = build_matrix(&index, &records);
    let successors = build_successors(&index, &matrix);

    Snapshot {
        index,
        matrix,
        records,
        successors,
    }
}

/// Derives a new snapshot retaining the records with
/// `start <= time <= end`.
pub fn filter_by_time(source: &Snapshot, start: Timestamp, end: Timestamp) -> Result<Snapshot> {
    if start > end {
        return Err(GraphError::InvalidWindow { start, end });
    }
    Ok(build(slice_window(source.records(), start, end).to_vec()))
}

/// Derives a new snapshot retaining the records where the sender or the
/// receiver is a member of `ids`. Order-preserving.
#[must_use]
pub fn filter_by_users(source: &Snapshot, ids: &[UserId]) -> Snapshot {
    let keep: HashSet<UserId> = ids.iter().copied().collect();
    let records = source
        .records()
        .iter()
        .filter(|r| keep.contains(&r.sender) || keep.contains(&r.receiver))
        .copied()
        .collect();
    build(records)
}

/// Locates the contiguous run of records inside `[start, end]`. The record
/// sequence is sorted by time, so the run is a single slice; an empty run
/// yields the empty snapshot.
fn slice_window(records: &[Interaction], start: Timestamp, end: Timestamp) -> &[Interaction] {
    let lo = records.partition_point(|r| r.time < start);
    let hi = records.partition_point(|r| r.time <= end);
    if lo >= hi {
        return &[];
    }
    &records[lo..hi]
}

#[allow(clippy::indexing_slicing)] // Guarded: both indices come from the index built over these records
fn build_matrix(index: &UserIndex, records: &[Interaction]) -> Vec<Vec<u32>> {
    let n = index.len();
    let mut matrix = vec![vec![0_u32; n]; n];

    for record in records {
        if let (Some(i), Some(j)) = (index.index_of(record.sender), index.index_of(record.receiver))
        {
            matrix[i][j] += 1;
        }
    }
    matrix
}

/// Row-scans the matrix in increasing column order, translating positive
/// columns back to user ids.
fn build_successors(index: &UserIndex, matrix: &[Vec<u32>]) -> Vec<Vec<UserId>> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &weight)| weight > 0)
                .filter_map(|(j, _)| index.user_at(j))
                .collect()
        })
        .collect()
}
