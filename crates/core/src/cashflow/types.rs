//! Cash-flow series types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::period::DateRange;

/// Movement and running balance of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    /// Calendar day.
    pub date: NaiveDate,
    /// Inflows due on this day.
    pub inflow_total: Decimal,
    /// Outflows due on this day.
    pub outflow_total: Decimal,
    /// Inflow minus outflow.
    pub net_of_day: Decimal,
    /// Balance after this day's movement.
    pub running_balance: Decimal,
}

/// Day-bucketed series over an explicit date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    /// Covered range.
    pub range: DateRange,
    /// Signed sum of settled entries due before the range.
    pub opening_balance: Decimal,
    /// Running balance at the end of the range.
    pub closing_balance: Decimal,
    /// Sum of inflows in the range.
    pub total_inflow: Decimal,
    /// Sum of outflows in the range.
    pub total_outflow: Decimal,
    /// One point per day, ascending, no gaps.
    pub points: Vec<CashFlowPoint>,
    /// Data-quality problems met while building.
    pub diagnostics: Diagnostics,
}
