//! Store query filters.

use fluxo_shared::types::{AccountId, CostCenterId, CounterpartyId};
use serde::{Deserialize, Serialize};

use crate::ledger::{Account, AccountType, EntryKind, EntryStatus, LedgerEntry};
use crate::period::DateRange;

/// Filter for `LedgerStore::list_entries`. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryQuery {
    /// Only entries of this kind.
    pub kind: Option<EntryKind>,
    /// Only entries with this status.
    pub status: Option<EntryStatus>,
    /// Only entries posted to one of these accounts.
    #[serde(default)]
    pub account_ids: Vec<AccountId>,
    /// Only entries due within this range.
    pub due: Option<DateRange>,
    /// Only entries of this cost center.
    pub cost_center_id: Option<CostCenterId>,
    /// Only entries with this counterparty.
    pub counterparty_id: Option<CounterpartyId>,
}

impl EntryQuery {
    /// Creates a query matching every entry.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to a kind.
    #[must_use]
    pub const fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts to a status.
    #[must_use]
    pub const fn status(mut self, status: EntryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to an account; may be called repeatedly.
    #[must_use]
    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_ids.push(account_id);
        self
    }

    /// Restricts to a due-date range.
    #[must_use]
    pub const fn due_within(mut self, range: DateRange) -> Self {
        self.due = Some(range);
        self
    }

    /// Restricts to a cost center.
    #[must_use]
    pub const fn cost_center(mut self, cost_center_id: CostCenterId) -> Self {
        self.cost_center_id = Some(cost_center_id);
        self
    }

    /// Restricts to a counterparty.
    #[must_use]
    pub const fn counterparty(mut self, counterparty_id: CounterpartyId) -> Self {
        self.counterparty_id = Some(counterparty_id);
        self
    }

    /// Returns true if the entry satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        self.kind.is_none_or(|k| entry.kind == k)
            && self.status.is_none_or(|s| entry.status == s)
            && (self.account_ids.is_empty()
                || entry.account_id.is_some_and(|id| self.account_ids.contains(&id)))
            && self.due.is_none_or(|r| r.contains(entry.due_date))
            && self.cost_center_id.is_none_or(|c| entry.cost_center_id == Some(c))
            && self.counterparty_id.is_none_or(|c| entry.counterparty_id == Some(c))
    }
}

/// Filter for `LedgerStore::list_accounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountQuery {
    /// Only accounts of this type.
    pub account_type: Option<AccountType>,
    /// Drop soft-deactivated accounts.
    #[serde(default)]
    pub active_only: bool,
}

impl AccountQuery {
    /// Creates a query matching every account.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to card accounts.
    #[must_use]
    pub fn cards() -> Self {
        Self {
            account_type: Some(AccountType::Card),
            active_only: false,
        }
    }

    /// Returns true if the account satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, account: &Account) -> bool {
        self.account_type.is_none_or(|t| account.account_type == t)
            && (account.active || !self.active_only)
    }
}
