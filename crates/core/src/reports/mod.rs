//! Income statement (DRE) generation.
//!
//! Folds settled entries into the seven statement lines:
//! gross revenue, deductions, net revenue, costs, gross profit,
//! operating expenses and net profit.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::IncomeStatementComposer;
pub use types::{CategoryExpense, CategoryRevenue, IncomeStatement};
