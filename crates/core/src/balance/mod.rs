//! Confirmed and projected account balances.

pub mod filter;
pub mod service;
pub mod types;


pub use filter::{AccountFilter, AccountScope};
pub use service::BalanceAggregator;
pub use types::{AccountBalanceSnapshot, BalanceReport};
