//! Balance-holding accounts.

use chrono::NaiveDate;
use fluxo_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Bank or cash account.
    #[serde(alias = "corrente", alias = "bank", alias = "cash")]
    Ordinary,
    /// Credit card.
    #[serde(alias = "cartao", alias = "credit_card")]
    Card,
}

/// A balance-holding container entries post against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Ordinary or card.
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Balance at `opening_date`. Negative for a card's starting debt.
    #[serde(default)]
    pub opening_balance: Decimal,
    /// Date the opening balance refers to.
    pub opening_date: NaiveDate,
    /// Credit limit, cards only.
    #[serde(default)]
    pub credit_limit: Option<Decimal>,
    /// Soft-deactivation flag.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Account {
    /// Creates an active ordinary account with a zero opening balance.
    #[must_use]
    pub fn ordinary(name: impl Into<String>, opening_date: NaiveDate) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type: AccountType::Ordinary,
            opening_balance: Decimal::ZERO,
            opening_date,
            credit_limit: None,
            active: true,
        }
    }

    /// Creates an active card account with the given limit.
    #[must_use]
    pub fn card(name: impl Into<String>, opening_date: NaiveDate, credit_limit: Decimal) -> Self {
        Self {
            account_type: AccountType::Card,
            credit_limit: Some(credit_limit),
            ..Self::ordinary(name, opening_date)
        }
    }

    /// Sets the opening balance.
    #[must_use]
    pub fn with_opening_balance(mut self, opening_balance: Decimal) -> Self {
        self.opening_balance = opening_balance;
        self
    }

    /// Returns true for credit card accounts.
    #[must_use]
    pub fn is_card(&self) -> bool {
        self.account_type == AccountType::Card
    }
}
