//! In-memory ledger store.

use std::io::Read;
use std::path::Path;

use super::LedgerStore;
use super::error::StoreError;
use super::query::{AccountQuery, EntryQuery};
use super::snapshot::LedgerSnapshot;
use crate::ledger::{Account, Category, LedgerEntry};

/// Ledger store backed by a vector of each entity.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: LedgerSnapshot,
}

impl InMemoryStore {
    /// Creates a store over the given data.
    #[must_use]
    pub const fn new(data: LedgerSnapshot) -> Self {
        Self { data }
    }

    /// Parses a JSON document shaped like [`LedgerSnapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Reads a JSON document from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Decode`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    /// Reads a JSON document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Decode`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Adds an entry.
    pub fn insert_entry(&mut self, entry: LedgerEntry) {
        self.data.entries.push(entry);
    }

    /// Adds an account.
    pub fn insert_account(&mut self, account: Account) {
        self.data.accounts.push(account);
    }

    /// Adds a category.
    pub fn insert_category(&mut self, category: Category) {
        self.data.categories.push(category);
    }
}

impl LedgerStore for InMemoryStore {
    fn list_entries(&self, query: &EntryQuery) -> Result<Vec<LedgerEntry>, StoreError> {
        Ok(self.data.entries.iter().filter(|e| query.matches(e)).cloned().collect())
    }

    fn list_accounts(&self, query: &AccountQuery) -> Result<Vec<Account>, StoreError> {
        Ok(self.data.accounts.iter().filter(|a| query.matches(a)).cloned().collect())
    }

    fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.data.categories.clone())
    }
}
