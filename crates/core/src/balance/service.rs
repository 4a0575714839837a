//! Confirmed and projected balance aggregation.

use std::collections::HashMap;

use chrono::NaiveDate;
use fluxo_shared::types::AccountId;
use rust_decimal::Decimal;
use tracing::debug;

use super::filter::AccountFilter;
use super::types::{AccountBalanceSnapshot, BalanceReport};
use crate::diagnostics::{Diagnostics, EntryIssue};
use crate::ledger::{Account, EntryKind, EntryStatus, LedgerEntry};

#[derive(Debug, Default)]
struct Accumulator {
    settled: Decimal,
    pending_inflow: Decimal,
    pending_outflow: Decimal,
}

/// Aggregates account balances.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Computes confirmed and projected balances per account and in total.
    ///
    /// - confirmed = opening balance + settled inflows - settled outflows,
    ///   counting settlements dated on or before `as_of`
    /// - projected = confirmed + pending inflows - pending outflows, whatever
    ///   their due date
    ///
    /// Canceled entries, unassigned entries and entries of accounts outside
    /// the filter are left out entirely. Entries pointing at unknown accounts
    /// are skipped and counted in the report diagnostics.
    #[must_use]
    pub fn aggregate(
        entries: &[LedgerEntry],
        accounts: &[Account],
        filter: &AccountFilter,
        as_of: NaiveDate,
    ) -> BalanceReport {
        let scope = filter.resolve(accounts);
        let mut diagnostics = Diagnostics::default();
        let mut sums: HashMap<AccountId, Accumulator> = scope
            .accounts()
            .iter()
            .map(|a| (a.id, Accumulator::default()))
            .collect();

        for entry in entries.iter().filter(|e| e.is_counted()) {
            let Some(account_id) = entry.account_id else {
                continue;
            };
            if !scope.is_known(account_id) {
                diagnostics.record(entry, EntryIssue::MissingAccount);
                continue;
            }
            let Some(acc) = sums.get_mut(&account_id) else {
                continue;
            };

            match (entry.status, entry.kind) {
                (EntryStatus::Settled, _) => {
                    let (settled_on, fallback) = entry.effective_settled_date();
                    if fallback {
                        diagnostics.record(entry, EntryIssue::SettledWithoutDate);
                    }
                    if settled_on <= as_of {
                        acc.settled += entry.signed_amount();
                    }
                }
                (EntryStatus::Pending, EntryKind::Inflow) => acc.pending_inflow += entry.amount,
                (EntryStatus::Pending, EntryKind::Outflow) => acc.pending_outflow += entry.amount,
                (EntryStatus::Canceled, _) => {}
            }
        }

        let mut snapshots: Vec<AccountBalanceSnapshot> = scope
            .accounts()
            .iter()
            .map(|account| {
                let acc = sums.remove(&account.id).unwrap_or_default();
                let confirmed = account.opening_balance + acc.settled;
                AccountBalanceSnapshot {
                    account_id: account.id,
                    account_name: account.name.clone(),
                    account_type: account.account_type,
                    confirmed,
                    projected: confirmed + acc.pending_inflow - acc.pending_outflow,
                    pending_inflow: acc.pending_inflow,
                    pending_outflow: acc.pending_outflow,
                    as_of,
                }
            })
            .collect();
        snapshots.sort_by(|a, b| a.account_name.cmp(&b.account_name));

        let total_confirmed: Decimal = snapshots.iter().map(|s| s.confirmed).sum();
        let total_projected: Decimal = snapshots.iter().map(|s| s.projected).sum();

        debug!(
            %as_of,
            accounts = snapshots.len(),
            %total_confirmed,
            %total_projected,
            skipped = diagnostics.missing_account,
            "aggregated balances"
        );

        BalanceReport {
            as_of,
            accounts: snapshots,
            total_confirmed,
            total_projected,
            diagnostics,
        }
    }
}
