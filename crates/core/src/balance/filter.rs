//! Account selection for account-scoped views.

use std::collections::HashSet;

use fluxo_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use crate::ledger::{Account, LedgerEntry};

/// Filter restricting a view to a subset of accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFilter {
    /// Accounts to include. Empty means every account.
    #[serde(default)]
    pub account_ids: Vec<AccountId>,
    /// Drop soft-deactivated accounts.
    #[serde(default)]
    pub exclude_inactive: bool,
}

impl AccountFilter {
    /// Creates a filter that admits everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account to the selection.
    #[must_use]
    pub fn with_account(mut self, account_id: AccountId) -> Self {
        self.account_ids.push(account_id);
        self
    }

    /// Sets whether inactive accounts are dropped.
    #[must_use]
    pub const fn exclude_inactive(mut self, exclude: bool) -> Self {
        self.exclude_inactive = exclude;
        self
    }

    /// Returns true if the filter selects every account and every entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.account_ids.is_empty() && !self.exclude_inactive
    }

    /// Resolves the filter against the known accounts.
    #[must_use]
    pub fn resolve<'a>(&self, accounts: &'a [Account]) -> AccountScope<'a> {
        let selected: HashSet<AccountId> = self.account_ids.iter().copied().collect();
        let admitted: Vec<&Account> = accounts
            .iter()
            .filter(|a| selected.is_empty() || selected.contains(&a.id))
            .filter(|a| a.active || !self.exclude_inactive)
            .collect();

        AccountScope {
            ids: admitted.iter().map(|a| a.id).collect(),
            known: accounts.iter().map(|a| a.id).collect(),
            accounts: admitted,
            global: self.is_empty(),
        }
    }
}

/// An [`AccountFilter`] resolved against a concrete account list.
#[derive(Debug, Clone)]
pub struct AccountScope<'a> {
    accounts: Vec<&'a Account>,
    ids: HashSet<AccountId>,
    known: HashSet<AccountId>,
    global: bool,
}

impl<'a> AccountScope<'a> {
    /// Admitted accounts, in input order.
    #[must_use]
    pub fn accounts(&self) -> &[&'a Account] {
        &self.accounts
    }

    /// Returns true when no account restriction applies.
    #[must_use]
    pub const fn is_global(&self) -> bool {
        self.global
    }

    /// Returns true if the account exists in the store.
    #[must_use]
    pub fn is_known(&self, account_id: AccountId) -> bool {
        self.known.contains(&account_id)
    }

    /// Returns true if the account passed the filter.
    #[must_use]
    pub fn admits_account(&self, account_id: AccountId) -> bool {
        self.ids.contains(&account_id)
    }

    /// Returns true if the entry belongs in a view over this scope.
    ///
    /// A global scope admits every entry, including unassigned ones.
    /// A restricted scope admits only entries posted to an admitted account.
    #[must_use]
    pub fn admits(&self, entry: &LedgerEntry) -> bool {
        if self.global {
            return true;
        }
        entry.account_id.is_some_and(|id| self.ids.contains(&id))
    }
}
