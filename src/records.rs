//! Distance records and leaderboard
//!
//! Tracks the top 10 runs of this process. Nothing is persisted.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::consts::UNITS_PER_METER;

/// Maximum number of runs to keep
pub const MAX_RECORDS: usize = 10;

/// Distance in meters for a world X position
pub fn record_for_x(x: i32) -> i32 {
    x / UNITS_PER_METER
}

/// Format a record with thousands separators, e.g. `12345` -> `"12,345m"`
pub fn format_record(meters: i32) -> String {
    let digits = meters.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if meters < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        let remaining = digits.len() - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out.push('m');
    out
}

/// A single finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Distance reached in meters
    pub record: i32,
    /// Damage taken during the run
    pub damage_count: u32,
}

impl RecordEntry {
    /// Farther runs rank higher; at equal distance the cleaner run wins
    fn outranks(&self, other: &RecordEntry) -> bool {
        (self.record, Reverse(self.damage_count)) > (other.record, Reverse(other.damage_count))
    }
}

/// Best runs of this process, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub entries: Vec<RecordEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run would make the board. Runs that never left the cliff don't count.
    pub fn qualifies(&self, entry: &RecordEntry) -> bool {
        if entry.record <= 0 {
            return false;
        }
        self.entries.len() < MAX_RECORDS
            || self.entries.last().is_none_or(|last| entry.outranks(last))
    }

    /// Add a run. Returns the 1-indexed rank, or None if it didn't make the board
    pub fn add_run(&mut self, record: i32, damage_count: u32) -> Option<usize> {
        let entry = RecordEntry {
            record,
            damage_count,
        };
        if !self.qualifies(&entry) {
            return None;
        }

        // Exact ties keep the earlier run first
        let index = self.entries.partition_point(|e| !entry.outranks(e));
        self.entries.insert(index, entry);
        self.entries.truncate(MAX_RECORDS);
        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best distance so far
    pub fn best(&self) -> Option<i32> {
        self.entries.first().map(|e| e.record)
    }
}
