//! Overdue analysis of pending receivables and payables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ledger::{EntryKind, LedgerEntry};


/// Aging label of a pending entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBucket {
    /// Due date has passed.
    Overdue,
    /// Due today.
    DueToday,
    /// Not yet due.
    Upcoming,
}

/// A pending entry with its offset from today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingEntry {
    /// The pending entry.
    pub entry: LedgerEntry,
    /// Whole days since the due date; negative when not yet due.
    pub days_overdue: i64,
    /// Label derived from `days_overdue`.
    pub bucket: AgingBucket,
}

/// Pending entries of one kind split into overdue and upcoming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingReport {
    /// Kind analyzed.
    pub kind: EntryKind,
    /// Reference date.
    pub today: NaiveDate,
    /// Entries due today or earlier, earliest due first.
    pub overdue: Vec<AgingEntry>,
    /// Entries due after today, earliest due first.
    pub upcoming: Vec<AgingEntry>,
    /// Sum of strictly overdue entries (`days_overdue > 0`).
    pub total_overdue: Decimal,
    /// Sum of entries due today.
    pub total_due_today: Decimal,
    /// Sum of entries not yet due.
    pub total_upcoming: Decimal,
    /// Sum of every pending entry of this kind.
    pub total_all: Decimal,
}

/// Analyzes pending entries against today's date.
pub struct AgingAnalyzer;

impl AgingAnalyzer {
    /// Partitions pending entries of `kind` by how overdue they are.
    ///
    /// Comparison is date-only. Entries due today land in `overdue` with
    /// `days_overdue = 0` but only strictly overdue ones feed `total_overdue`.
    #[must_use]
    pub fn analyze(entries: &[LedgerEntry], kind: EntryKind, today: NaiveDate) -> AgingReport {
        let mut overdue = Vec::new();
        let mut upcoming = Vec::new();
        let mut total_overdue = Decimal::ZERO;
        let mut total_due_today = Decimal::ZERO;
        let mut total_upcoming = Decimal::ZERO;

        for entry in entries.iter().filter(|e| e.kind == kind && e.is_pending()) {
            let days_overdue = (today - entry.due_date).num_days();
            let bucket = match days_overdue {
                d if d > 0 => AgingBucket::Overdue,
                0 => AgingBucket::DueToday,
                _ => AgingBucket::Upcoming,
            };
            let aged = AgingEntry {
                entry: entry.clone(),
                days_overdue,
                bucket,
            };

            match bucket {
                AgingBucket::Overdue => {
                    total_overdue += entry.amount;
                    overdue.push(aged);
                }
                AgingBucket::DueToday => {
                    total_due_today += entry.amount;
                    overdue.push(aged);
                }
                AgingBucket::Upcoming => {
                    total_upcoming += entry.amount;
                    upcoming.push(aged);
                }
            }
        }

        overdue.sort_by_key(|a| a.entry.due_date);
        upcoming.sort_by_key(|a| a.entry.due_date);
        let total_all = total_overdue + total_due_today + total_upcoming;

        debug!(
            ?kind,
            %today,
            overdue = overdue.len(),
            upcoming = upcoming.len(),
            %total_overdue,
            "analyzed aging"
        );

        AgingReport {
            kind,
            today,
            overdue,
            upcoming,
            total_overdue,
            total_due_today,
            total_upcoming,
            total_all,
        }
    }
}
