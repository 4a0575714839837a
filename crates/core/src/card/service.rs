//! Credit card exposure calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::ExposureError;
use super::types::CreditCardExposure;
use crate::ledger::{Account, EntryKind, LedgerEntry};
use crate::period::MonthCycle;

/// Computes invoice-cycle exposure of card accounts.
pub struct CardExposureCalculator;

impl CardExposureCalculator {
    /// Computes the exposure of a single card account.
    ///
    /// Cycles are calendar months around `today`. Cycle totals count every
    /// non-canceled outflow posted to the card by due date, whatever its
    /// status.
    ///
    /// The after-payment figure adds the current cycle back instead of
    /// subtracting it; displays depend on this exact formula.
    ///
    /// # Errors
    ///
    /// Returns [`ExposureError::NotACard`] for ordinary accounts.
    pub fn exposure(
        account: &Account,
        entries: &[LedgerEntry],
        today: NaiveDate,
    ) -> Result<CreditCardExposure, ExposureError> {
        if !account.is_card() {
            return Err(ExposureError::NotACard(account.id));
        }

        let credit_limit = account.credit_limit.unwrap_or_else(|| {
            warn!(account_id = %account.id, "card account has no credit limit, assuming zero");
            Decimal::ZERO
        });

        let current_cycle = MonthCycle::Current.window(today);
        let next_cycle = MonthCycle::Next.window(today);
        let previous_cycle = MonthCycle::Previous.window(today);

        let mut current_cycle_total = Decimal::ZERO;
        let mut next_cycle_total = Decimal::ZERO;
        let mut previous_cycle_total = Decimal::ZERO;
        let mut scheduled_pending = Decimal::ZERO;

        let charges = entries.iter().filter(|e| {
            e.kind == EntryKind::Outflow && e.is_counted() && e.account_id == Some(account.id)
        });
        for charge in charges {
            if current_cycle.contains(charge.due_date) {
                current_cycle_total += charge.amount;
            } else if next_cycle.contains(charge.due_date) {
                next_cycle_total += charge.amount;
            } else if previous_cycle.contains(charge.due_date) {
                previous_cycle_total += charge.amount;
            }
            if charge.is_pending() {
                scheduled_pending += charge.amount;
            }
        }

        let available_limit = credit_limit - current_cycle_total - scheduled_pending;
        let available_limit_after_payment = credit_limit - scheduled_pending + current_cycle_total;
        let limit_usage_percent = if credit_limit.is_zero() {
            Decimal::ZERO
        } else {
            let committed = current_cycle_total + scheduled_pending;
            (committed / credit_limit * Decimal::ONE_HUNDRED).round_dp(2)
        };

        debug!(
            account_id = %account.id,
            %current_cycle_total,
            %scheduled_pending,
            %available_limit,
            "computed card exposure"
        );

        Ok(CreditCardExposure {
            account_id: account.id,
            account_name: account.name.clone(),
            credit_limit,
            current_cycle,
            current_cycle_total,
            next_cycle_total,
            previous_cycle_total,
            scheduled_pending,
            available_limit,
            available_limit_after_payment,
            limit_usage_percent,
        })
    }

    /// Computes the exposure of every card account, sorted by name.
    ///
    /// Ordinary accounts are skipped.
    #[must_use]
    pub fn exposures(
        accounts: &[Account],
        entries: &[LedgerEntry],
        today: NaiveDate,
    ) -> Vec<CreditCardExposure> {
        let mut exposures: Vec<CreditCardExposure> = accounts
            .iter()
            .filter_map(|account| Self::exposure(account, entries, today).ok())
            .collect();
        exposures.sort_by(|a, b| a.account_name.cmp(&b.account_name));
        exposures
    }
}
