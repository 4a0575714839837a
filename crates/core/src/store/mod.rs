//! Ledger store adapter.
//!
//! The engine only reads. Mutations happen elsewhere and simply change
//! what the next query returns.

pub mod error;
pub mod memory;
pub mod query;
pub mod snapshot;

pub use error::StoreError;
pub use memory::InMemoryStore;
pub use query::{AccountQuery, EntryQuery};
pub use snapshot::LedgerSnapshot;

use crate::ledger::{Account, Category, LedgerEntry};

/// Read access to ledger entities.
pub trait LedgerStore {
    /// Lists entries matching a query.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store fails.
    fn list_entries(&self, query: &EntryQuery) -> Result<Vec<LedgerEntry>, StoreError>;

    /// Lists accounts matching a query.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store fails.
    fn list_accounts(&self, query: &AccountQuery) -> Result<Vec<Account>, StoreError>;

    /// Lists every category.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store fails.
    fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
}
