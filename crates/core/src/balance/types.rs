//! Balance view types.

use chrono::NaiveDate;
use fluxo_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::ledger::AccountType;

/// Confirmed and projected balance of one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalanceSnapshot {
    /// Account ID.
    pub account_id: AccountId,
    /// Account name.
    pub account_name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Opening balance plus settled movements up to `as_of`.
    pub confirmed: Decimal,
    /// Confirmed balance plus every pending movement.
    pub projected: Decimal,
    /// Pending inflow total.
    pub pending_inflow: Decimal,
    /// Pending outflow total.
    pub pending_outflow: Decimal,
    /// Cutoff date for settled movements.
    pub as_of: NaiveDate,
}

/// Balances of every account in scope plus grand totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Cutoff date for settled movements.
    pub as_of: NaiveDate,
    /// Per-account snapshots, sorted by account name.
    pub accounts: Vec<AccountBalanceSnapshot>,
    /// Sum of confirmed balances.
    pub total_confirmed: Decimal,
    /// Sum of projected balances.
    pub total_projected: Decimal,
    /// Data-quality problems met while aggregating.
    pub diagnostics: Diagnostics,
}

impl BalanceReport {
    /// Returns the snapshot for an account, if it was in scope.
    #[must_use]
    pub fn account(&self, account_id: AccountId) -> Option<&AccountBalanceSnapshot> {
        self.accounts.iter().find(|a| a.account_id == account_id)
    }
}
