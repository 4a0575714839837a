//! Ledger aggregation and financial reporting engine for Fluxo.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every report is a pure function of a ledger snapshot and explicit dates.
//!
//! # Modules
//!
//! - `ledger` - Entries, accounts and categories
//! - `classifier` - DRE line classification of outflows
//! - `balance` - Confirmed and projected balances
//! - `cashflow` - Day-bucketed running-balance series
//! - `aging` - Overdue analysis of pending entries
//! - `card` - Credit card invoice-cycle exposure
//! - `reports` - Income statement (DRE)
//! - `store` - Ledger store adapter and snapshots
//! - `dashboard` - One rendering pass over every view

pub mod aging;
pub mod balance;
pub mod card;
pub mod cashflow;
pub mod classifier;
pub mod dashboard;
pub mod diagnostics;
pub mod ledger;
pub mod period;
pub mod reports;
pub mod store;
pub mod time;

#[cfg(test)]
mod test_support;
