//! Income statement (DRE) types.

use fluxo_shared::types::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classifier::DreBucket;
use crate::diagnostics::Diagnostics;
use crate::period::DateRange;

/// Settled inflow total of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    /// Category ID; `None` for uncategorized inflows.
    pub category_id: Option<CategoryId>,
    /// Category name; `None` for uncategorized inflows.
    pub category_name: Option<String>,
    /// Sum of settled inflows.
    pub total: Decimal,
    /// Number of entries summed.
    pub entry_count: usize,
}

/// Settled outflow total of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExpense {
    /// Category ID; `None` for uncategorized outflows.
    pub category_id: Option<CategoryId>,
    /// Category name; `None` for uncategorized outflows.
    pub category_name: Option<String>,
    /// Statement line the category feeds.
    pub bucket: DreBucket,
    /// Sum of settled outflows.
    pub total: Decimal,
    /// Number of entries summed.
    pub entry_count: usize,
}

/// Seven-line income statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Due-date window the statement covers; `None` when the caller
    /// supplied a pre-filtered entry set.
    pub period: Option<DateRange>,
    /// Sum of settled inflows.
    pub gross_revenue: Decimal,
    /// Settled outflows classified as deductions.
    pub deductions: Decimal,
    /// Gross revenue minus deductions.
    pub net_revenue: Decimal,
    /// Settled outflows classified as costs.
    pub costs: Decimal,
    /// Net revenue minus costs.
    pub gross_profit: Decimal,
    /// Remaining settled outflows, including uncategorized ones.
    pub operating_expenses: Decimal,
    /// Gross profit minus operating expenses.
    pub net_profit: Decimal,
    /// Revenue per category, largest first.
    pub revenue_by_category: Vec<CategoryRevenue>,
    /// Expenses per category, largest first.
    pub expense_by_category: Vec<CategoryExpense>,
    /// Data-quality problems met while composing.
    pub diagnostics: Diagnostics,
}

impl IncomeStatement {
    /// Sum of every expense line.
    #[must_use]
    pub fn total_outflow(&self) -> Decimal {
        self.deductions + self.costs + self.operating_expenses
    }
}
