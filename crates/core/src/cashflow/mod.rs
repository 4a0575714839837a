//! Day-bucketed cash-flow series with running balance.

pub mod service;
pub mod types;


pub use service::CashFlowBuilder;
pub use types::{CashFlowPoint, CashFlowSeries};
