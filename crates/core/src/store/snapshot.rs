//! Consistent snapshot of everything the reports read.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::LedgerStore;
use super::error::StoreError;
use super::query::{AccountQuery, EntryQuery};
use crate::diagnostics::{self, Diagnostics};
use crate::ledger::{Account, Category, LedgerEntry};

/// Entries and reference entities fetched together for one rendering pass.
///
/// Every view of a dashboard reads the same snapshot, so balances and the
/// cash-flow series never disagree about which entries exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Ledger entries.
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
    /// Accounts.
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl LedgerSnapshot {
    /// Fetches every entry, account and category from a store.
    ///
    /// # Errors
    ///
    /// Propagates the first store failure.
    pub fn fetch<S: LedgerStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        let accounts = store.list_accounts(&AccountQuery::all())?;
        let categories = store.list_categories()?;
        let entries = store.list_entries(&EntryQuery::all())?;

        debug!(
            entries = entries.len(),
            accounts = accounts.len(),
            categories = categories.len(),
            "fetched ledger snapshot"
        );

        Ok(Self {
            entries,
            accounts,
            categories,
        })
    }

    /// Runs the global consistency check over the snapshot.
    #[must_use]
    pub fn inspect(&self) -> Diagnostics {
        diagnostics::inspect(&self.entries, &self.accounts, &self.categories)
    }
}
