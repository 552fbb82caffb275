use std::collections::HashSet;

use crate::domain::{DuplicateRecord, NormalizedRow};

/// Drops rows whose email has already been accepted.
///
/// The seen-set lives on the value, so a fresh `Deduplicator` starts a fresh run.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

/// Rows kept on first sighting plus one entry per repeated email
#[derive(Debug, Default)]
pub struct DedupeOutcome {
    pub deduped: Vec<NormalizedRow>,
    pub duplicates: Vec<DuplicateRecord>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the row was kept, `false` if its email was seen before
    pub fn accept(&mut self, row: &NormalizedRow) -> bool {
        if self.seen.contains(&row.email) {
            return false;
        }
        self.seen.insert(row.email.clone());
        true
    }

    /// Dedupe an ordered batch; the first occurrence of each email wins
    pub fn dedupe(&mut self, rows: Vec<NormalizedRow>) -> DedupeOutcome {
        let mut outcome = DedupeOutcome::default();

        for row in rows {
            if self.accept(&row) {
                outcome.deduped.push(row);
            } else {
                outcome.duplicates.push(DuplicateRecord { email: row.email });
            }
        }

        outcome
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
