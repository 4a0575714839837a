//! Entry categories.

use fluxo_shared::types::CategoryId;
use serde::{Deserialize, Serialize};

use super::entry::EntryKind;

/// Classification dimension for ledger entries.
///
/// The DRE classifier matches keywords against `name`, so the name doubles
/// as the category's accounting role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Kind of entries this category is meant for.
    pub kind: EntryKind,
    /// Optional display color.
    #[serde(default)]
    pub color: Option<String>,
}

impl Category {
    /// Creates a category without a color.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            color: None,
        }
    }
}
