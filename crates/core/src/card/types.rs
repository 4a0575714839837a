//! Card exposure types.

use fluxo_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::DateRange;

/// Invoice-cycle exposure of one credit card account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardExposure {
    /// Card account ID.
    pub account_id: AccountId,
    /// Card account name.
    pub account_name: String,
    /// Credit limit (zero when the account has none).
    pub credit_limit: Decimal,
    /// Month containing today.
    pub current_cycle: DateRange,
    /// Charges due in the current cycle, any status.
    pub current_cycle_total: Decimal,
    /// Charges due in the following month, any status.
    pub next_cycle_total: Decimal,
    /// Charges due in the preceding month, any status.
    pub previous_cycle_total: Decimal,
    /// Pending charges, any due date.
    pub scheduled_pending: Decimal,
    /// `credit_limit - current_cycle_total - scheduled_pending`. May be negative.
    pub available_limit: Decimal,
    /// `credit_limit - scheduled_pending + current_cycle_total`.
    pub available_limit_after_payment: Decimal,
    /// `(current_cycle_total + scheduled_pending) / credit_limit * 100`, 2 dp.
    pub limit_usage_percent: Decimal,
}
