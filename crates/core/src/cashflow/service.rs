//! Running-balance cash-flow series.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{CashFlowPoint, CashFlowSeries};
use crate::balance::AccountFilter;
use crate::diagnostics::{Diagnostics, EntryIssue};
use crate::ledger::{Account, EntryKind, LedgerEntry};
use crate::period::DateRange;

/// Builds chronological cash-flow series.
pub struct CashFlowBuilder;

impl CashFlowBuilder {
    /// Builds one point per day of `range` with a running balance.
    ///
    /// The series is seeded with the signed sum of settled entries due
    /// strictly before `range.start`. Within the range every non-canceled
    /// entry counts on its due date. Days without activity are zero-filled,
    /// so the same entries over a wider range reproduce the shared days.
    ///
    /// Entries posted to an unknown account are counted in the diagnostics.
    /// A global filter still plots them; a restricted one drops them.
    #[must_use]
    pub fn build(
        entries: &[LedgerEntry],
        accounts: &[Account],
        filter: &AccountFilter,
        range: DateRange,
    ) -> CashFlowSeries {
        let scope = filter.resolve(accounts);
        let mut diagnostics = Diagnostics::default();
        let mut opening_balance = Decimal::ZERO;
        let mut buckets: BTreeMap<chrono::NaiveDate, (Decimal, Decimal)> = BTreeMap::new();

        for entry in entries.iter().filter(|e| e.is_counted()) {
            if entry.account_id.is_some_and(|id| !scope.is_known(id)) {
                diagnostics.record(entry, EntryIssue::MissingAccount);
            }
            if !scope.admits(entry) {
                continue;
            }

            if entry.due_date < range.start {
                if entry.is_settled() {
                    opening_balance += entry.signed_amount();
                }
            } else if entry.due_date <= range.end {
                let bucket = buckets.entry(entry.due_date).or_default();
                match entry.kind {
                    EntryKind::Inflow => bucket.0 += entry.amount,
                    EntryKind::Outflow => bucket.1 += entry.amount,
                }
            }
        }

        if range.is_empty() {
            warn!(
                start = %range.start,
                end = %range.end,
                "cash-flow range is inverted, returning empty series"
            );
        }

        let mut running_balance = opening_balance;
        let mut total_inflow = Decimal::ZERO;
        let mut total_outflow = Decimal::ZERO;
        let points: Vec<CashFlowPoint> = range
            .days()
            .map(|date| {
                let (inflow_total, outflow_total) = buckets.get(&date).copied().unwrap_or_default();
                let net_of_day = inflow_total - outflow_total;
                running_balance += net_of_day;
                total_inflow += inflow_total;
                total_outflow += outflow_total;
                CashFlowPoint {
                    date,
                    inflow_total,
                    outflow_total,
                    net_of_day,
                    running_balance,
                }
            })
            .collect();

        debug!(
            start = %range.start,
            end = %range.end,
            days = points.len(),
            %opening_balance,
            closing_balance = %running_balance,
            "built cash-flow series"
        );

        CashFlowSeries {
            range,
            opening_balance,
            closing_balance: running_balance,
            total_inflow,
            total_outflow,
            points,
            diagnostics,
        }
    }
}
