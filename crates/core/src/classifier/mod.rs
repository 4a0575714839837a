//! DRE line classification of outflow entries.
//!
//! Settled outflows are bucketed by case-insensitive substring match of the
//! category name against two keyword tables. Deduction keywords are tested
//! first, so a name matching both tables is a deduction.

use fluxo_shared::ClassificationConfig;
use serde::{Deserialize, Serialize};

use crate::ledger::{Category, EntryKind, LedgerEntry};

/// Income statement line an outflow entry contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DreBucket {
    /// Taxes and other revenue deductions.
    Deduction,
    /// Cost of goods or services sold.
    Cost,
    /// Any other expense, including uncategorized outflows.
    OperatingExpense,
    /// Not a settled outflow; contributes to no expense line.
    None,
}

/// Lowercased keyword tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    deduction: Vec<String>,
    cost: Vec<String>,
}

impl KeywordTable {
    /// Builds a table from raw keyword lists.
    #[must_use]
    pub fn new<D, C>(deduction: D, cost: C) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            deduction: normalize(deduction),
            cost: normalize(cost),
        }
    }

    /// Builds a table from configuration.
    #[must_use]
    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self::new(&config.deduction_keywords, &config.cost_keywords)
    }

    /// Deduction keywords, lowercased.
    #[must_use]
    pub fn deduction_keywords(&self) -> &[String] {
        &self.deduction
    }

    /// Cost keywords, lowercased.
    #[must_use]
    pub fn cost_keywords(&self) -> &[String] {
        &self.cost
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }
}

fn normalize<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Maps ledger entries to DRE buckets.
#[derive(Debug, Clone, Default)]
pub struct EntryClassifier {
    table: KeywordTable,
}

impl EntryClassifier {
    /// Creates a classifier over the given keyword table.
    #[must_use]
    pub const fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    /// Creates a classifier from configuration.
    #[must_use]
    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self::new(KeywordTable::from_config(config))
    }

    /// Returns the keyword table in use.
    #[must_use]
    pub const fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Classifies an entry given its resolved category.
    ///
    /// Only settled outflows get an expense bucket. The entry's own kind
    /// decides eligibility; the category's kind is never consulted.
    #[must_use]
    pub fn classify(&self, entry: &LedgerEntry, category: Option<&Category>) -> DreBucket {
        if entry.kind != EntryKind::Outflow || !entry.is_settled() {
            return DreBucket::None;
        }
        self.classify_name(category.map(|c| c.name.as_str()))
    }

    /// Classifies an outflow by category name alone.
    #[must_use]
    pub fn classify_name(&self, category_name: Option<&str>) -> DreBucket {
        let Some(name) = category_name else {
            return DreBucket::OperatingExpense;
        };
        let name = name.to_lowercase();

        if self.table.deduction.iter().any(|k| name.contains(k.as_str())) {
            DreBucket::Deduction
        } else if self.table.cost.iter().any(|k| name.contains(k.as_str())) {
            DreBucket::Cost
        } else {
            DreBucket::OperatingExpense
        }
    }
}
