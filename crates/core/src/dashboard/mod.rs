//! Dashboard composition.
//!
//! Renders every report view from one ledger snapshot. The views are
//! independent of each other; they only share their input.

use chrono::NaiveDate;
use fluxo_shared::{AppError, EngineConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::aging::{AgingAnalyzer, AgingReport};
use crate::balance::{AccountFilter, BalanceAggregator, BalanceReport};
use crate::card::{CardExposureCalculator, CreditCardExposure};
use crate::cashflow::{CashFlowBuilder, CashFlowSeries};
use crate::classifier::EntryClassifier;
use crate::diagnostics::Diagnostics;
use crate::ledger::{Account, EntryKind, LedgerEntry};
use crate::period::DateRange;
use crate::reports::{IncomeStatement, IncomeStatementComposer};
use crate::store::{LedgerSnapshot, LedgerStore, StoreError};
use crate::time::Clock;

/// Errors that can occur while rendering a dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The snapshot could not be fetched.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Store(inner) => inner.into(),
        }
    }
}

/// Parameters of one rendering pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardParams {
    /// Reference date for balances, aging and card cycles.
    pub today: NaiveDate,
    /// Range of the cash-flow series.
    pub cash_flow_range: DateRange,
    /// Due-date window of the income statement.
    pub statement_period: DateRange,
    /// Accounts the account-scoped views are restricted to.
    #[serde(default)]
    pub account_filter: AccountFilter,
}

impl DashboardParams {
    /// Parameters covering the calendar month of `today` for every account.
    #[must_use]
    pub fn month_of(today: NaiveDate) -> Self {
        let month = DateRange::month_of(today);
        Self {
            today,
            cash_flow_range: month,
            statement_period: month,
            account_filter: AccountFilter::default(),
        }
    }

    /// Parameters for the current month according to a clock.
    #[must_use]
    pub fn current_month(clock: &dyn Clock) -> Self {
        Self::month_of(clock.today())
    }

    /// Restricts account-scoped views.
    #[must_use]
    pub fn with_account_filter(mut self, filter: AccountFilter) -> Self {
        self.account_filter = filter;
        self
    }
}

/// Every report view of one rendering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Reference date.
    pub today: NaiveDate,
    /// Confirmed and projected balances.
    pub balances: BalanceReport,
    /// Day-bucketed cash flow.
    pub cash_flow: CashFlowSeries,
    /// Aging of pending inflows.
    pub receivables: AgingReport,
    /// Aging of pending outflows.
    pub payables: AgingReport,
    /// Exposure of every card account in scope.
    pub cards: Vec<CreditCardExposure>,
    /// Income statement.
    pub income_statement: IncomeStatement,
    /// Global consistency check over the snapshot.
    pub diagnostics: Diagnostics,
}

/// Renders dashboards.
#[derive(Debug, Clone, Default)]
pub struct DashboardService {
    classifier: EntryClassifier,
}

impl DashboardService {
    /// Creates a service with the given classifier.
    #[must_use]
    pub const fn new(classifier: EntryClassifier) -> Self {
        Self { classifier }
    }

    /// Creates a service from engine configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(EntryClassifier::from_config(&config.classification))
    }

    /// Renders every view from an already fetched snapshot.
    #[must_use]
    pub fn render(&self, snapshot: &LedgerSnapshot, params: &DashboardParams) -> DashboardView {
        let filter = &params.account_filter;
        let scope = filter.resolve(&snapshot.accounts);
        let scoped_entries: Vec<LedgerEntry> = snapshot
            .entries
            .iter()
            .filter(|e| scope.admits(e))
            .cloned()
            .collect();
        let scoped_accounts: Vec<Account> = scope.accounts().iter().map(|a| (*a).clone()).collect();

        let balances = BalanceAggregator::aggregate(
            &snapshot.entries,
            &snapshot.accounts,
            filter,
            params.today,
        );
        let cash_flow = CashFlowBuilder::build(
            &snapshot.entries,
            &snapshot.accounts,
            filter,
            params.cash_flow_range,
        );
        let receivables = AgingAnalyzer::analyze(&scoped_entries, EntryKind::Inflow, params.today);
        let payables = AgingAnalyzer::analyze(&scoped_entries, EntryKind::Outflow, params.today);
        let cards = CardExposureCalculator::exposures(
            &scoped_accounts,
            &snapshot.entries,
            params.today,
        );
        let income_statement = IncomeStatementComposer::compose(
            &snapshot.entries,
            &snapshot.categories,
            &self.classifier,
            params.statement_period,
        );
        let diagnostics = snapshot.inspect();

        if !diagnostics.is_clean() {
            warn!(issues = diagnostics.total(), "ledger snapshot has data-quality issues");
        }
        info!(
            today = %params.today,
            entries = snapshot.entries.len(),
            accounts = scoped_accounts.len(),
            "rendered dashboard"
        );

        DashboardView {
            today: params.today,
            balances,
            cash_flow,
            receivables,
            payables,
            cards,
            income_statement,
            diagnostics,
        }
    }

    /// Fetches one snapshot from the store and renders it.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] if the snapshot cannot be fetched.
    pub fn render_from_store<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        params: &DashboardParams,
    ) -> Result<DashboardView, DashboardError> {
        let snapshot = LedgerSnapshot::fetch(store)?;
        Ok(self.render(&snapshot, params))
    }
}
