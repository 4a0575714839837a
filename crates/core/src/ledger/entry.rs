//! Ledger entry domain types.

use chrono::NaiveDate;
use fluxo_shared::types::{AccountId, CategoryId, CostCenterId, CounterpartyId, LedgerEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in (receivable / receipt).
    #[serde(alias = "receita")]
    Inflow,
    /// Money going out (payable / payment).
    #[serde(alias = "despesa")]
    Outflow,
}

impl EntryKind {
    /// Applies the sign implied by the kind to a non-negative amount.
    #[must_use]
    pub fn apply_sign(self, amount: Decimal) -> Decimal {
        match self {
            Self::Inflow => amount,
            Self::Outflow => -amount,
        }
    }
}

/// Settlement status of a ledger entry.
///
/// Stores label a settled outflow "pago" and a settled inflow "recebido";
/// both deserialize to [`EntryStatus::Settled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Not yet paid or received.
    #[serde(alias = "pendente")]
    Pending,
    /// Cash movement has happened.
    #[serde(alias = "pago", alias = "recebido", alias = "paid", alias = "received")]
    Settled,
    /// Excluded from every aggregate.
    #[serde(alias = "cancelado", alias = "cancelled")]
    Canceled,
}

/// A single recorded inflow or outflow obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for this entry.
    pub id: LedgerEntryId,
    /// Inflow or outflow.
    pub kind: EntryKind,
    /// Non-negative amount; the sign comes from `kind`.
    pub amount: Decimal,
    /// Date the obligation is due or expected.
    pub due_date: NaiveDate,
    /// Date the entry was actually settled.
    #[serde(default)]
    pub settled_date: Option<NaiveDate>,
    /// Settlement status.
    pub status: EntryStatus,
    /// Account the entry posts against.
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Classification category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Cost center, used for filtering only.
    #[serde(default)]
    pub cost_center_id: Option<CostCenterId>,
    /// Supplier or customer, used for filtering only.
    #[serde(default)]
    pub counterparty_id: Option<CounterpartyId>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl LedgerEntry {
    /// Creates a pending entry with no references.
    #[must_use]
    pub fn new(kind: EntryKind, amount: Decimal, due_date: NaiveDate) -> Self {
        Self {
            id: LedgerEntryId::new(),
            kind,
            amount,
            due_date,
            settled_date: None,
            status: EntryStatus::Pending,
            account_id: None,
            category_id: None,
            cost_center_id: None,
            counterparty_id: None,
            description: None,
        }
    }

    /// Marks the entry as settled on the given date.
    #[must_use]
    pub fn settled_on(mut self, date: NaiveDate) -> Self {
        self.status = EntryStatus::Settled;
        self.settled_date = Some(date);
        self
    }

    /// Marks the entry as canceled.
    #[must_use]
    pub fn canceled(mut self) -> Self {
        self.status = EntryStatus::Canceled;
        self
    }

    /// Posts the entry against an account.
    #[must_use]
    pub fn on_account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Assigns a category.
    #[must_use]
    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Returns the signed amount (positive for inflow, negative for outflow).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.kind.apply_sign(self.amount)
    }

    /// Returns false for canceled entries.
    #[must_use]
    pub fn is_counted(&self) -> bool {
        self.status != EntryStatus::Canceled
    }

    /// Returns true if the entry is settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.status == EntryStatus::Settled
    }

    /// Returns true if the entry is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == EntryStatus::Pending
    }

    /// Returns the date the cash movement counts on.
    ///
    /// A settled entry missing its settlement date falls back to the due date;
    /// the second element reports whether the fallback was used.
    #[must_use]
    pub fn effective_settled_date(&self) -> (NaiveDate, bool) {
        match self.settled_date {
            Some(date) => (date, false),
            None => (self.due_date, true),
        }
    }
}
