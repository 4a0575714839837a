//! Ledger domain model.
//!
//! Entries, accounts and categories as supplied by the ledger store.
//! The engine never mutates them.

pub mod account;
pub mod category;
pub mod entry;

pub use account::{Account, AccountType};
pub use category::Category;
pub use entry::{EntryKind, EntryStatus, LedgerEntry};
