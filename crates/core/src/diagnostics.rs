//! Data-quality diagnostics.
//!
//! Imperfect entries never abort a report. Each problem is logged as a
//! warning and counted here so callers can surface how much data a view
//! had to skip or repair.

use std::collections::HashMap;

use fluxo_shared::types::{AccountId, CategoryId};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ledger::{Account, Category, LedgerEntry};

/// A single data-quality problem found on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryIssue {
    /// `account_id` points at an account the store did not return.
    MissingAccount,
    /// `category_id` points at a category the store did not return.
    MissingCategory,
    /// Settled without a settlement date; the due date was used instead.
    SettledWithoutDate,
    /// The category's kind disagrees with the entry's kind.
    CategoryKindMismatch,
    /// Amount stored negative.
    NegativeAmount,
}

/// Counts of data-quality problems met while computing a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Entries skipped from account-scoped sums because their account is unknown.
    pub missing_account: usize,
    /// Entries whose category is unknown.
    pub missing_category: usize,
    /// Settled entries counted on their due date.
    pub settled_without_date: usize,
    /// Entries classified by their own kind despite a mismatched category.
    pub category_kind_mismatch: usize,
    /// Entries with a negative amount.
    pub negative_amount: usize,
}

impl Diagnostics {
    /// Records one issue for an entry and logs it.
    pub fn record(&mut self, entry: &LedgerEntry, issue: EntryIssue) {
        match issue {
            EntryIssue::MissingAccount => {
                self.missing_account += 1;
                warn!(
                    entry_id = %entry.id,
                    account_id = ?entry.account_id,
                    "entry references unknown account"
                );
            }
            EntryIssue::MissingCategory => {
                self.missing_category += 1;
                warn!(
                    entry_id = %entry.id,
                    category_id = ?entry.category_id,
                    "entry references unknown category"
                );
            }
            EntryIssue::SettledWithoutDate => {
                self.settled_without_date += 1;
                warn!(
                    entry_id = %entry.id,
                    due_date = %entry.due_date,
                    "settled entry has no settlement date, using due date"
                );
            }
            EntryIssue::CategoryKindMismatch => {
                self.category_kind_mismatch += 1;
                warn!(
                    entry_id = %entry.id,
                    kind = ?entry.kind,
                    "entry kind does not match its category kind"
                );
            }
            EntryIssue::NegativeAmount => {
                self.negative_amount += 1;
                warn!(entry_id = %entry.id, amount = %entry.amount, "entry amount is negative");
            }
        }
    }

    /// Total number of recorded issues.
    #[must_use]
    pub fn total(&self) -> usize {
        self.missing_account
            + self.missing_category
            + self.settled_without_date
            + self.category_kind_mismatch
            + self.negative_amount
    }

    /// Returns true if no issue was recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Checks every non-canceled entry against the reference entities.
///
/// This is the global consistency pass: it flags entries that individual
/// views silently skip.
#[must_use]
pub fn inspect(
    entries: &[LedgerEntry],
    accounts: &[Account],
    categories: &[Category],
) -> Diagnostics {
    let accounts: HashMap<AccountId, &Account> = accounts.iter().map(|a| (a.id, a)).collect();
    let categories: HashMap<CategoryId, &Category> = categories.iter().map(|c| (c.id, c)).collect();
    let mut diagnostics = Diagnostics::default();

    for entry in entries.iter().filter(|e| e.is_counted()) {
        if entry.amount < rust_decimal::Decimal::ZERO {
            diagnostics.record(entry, EntryIssue::NegativeAmount);
        }
        if entry.is_settled() && entry.settled_date.is_none() {
            diagnostics.record(entry, EntryIssue::SettledWithoutDate);
        }
        if let Some(account_id) = entry.account_id {
            if !accounts.contains_key(&account_id) {
                diagnostics.record(entry, EntryIssue::MissingAccount);
            }
        }
        if let Some(category_id) = entry.category_id {
            match categories.get(&category_id) {
                None => diagnostics.record(entry, EntryIssue::MissingCategory),
                Some(category) if category.kind != entry.kind => {
                    diagnostics.record(entry, EntryIssue::CategoryKindMismatch);
                }
                Some(_) => {}
            }
        }
    }

    diagnostics
}
