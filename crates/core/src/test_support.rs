//! Proptest strategies shared by the report property tests.

use chrono::{Days, NaiveDate};
use fluxo_shared::types::{AccountId, CategoryId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::ledger::{EntryKind, EntryStatus, LedgerEntry};

/// Deterministic account id for fixtures shared with strategies.
pub fn account_id(n: u128) -> AccountId {
    AccountId::from_uuid(uuid::Uuid::from_u128(n))
}

/// First day of the generated date window.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Dates within roughly four months of `epoch()`.
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..120).prop_map(|offset| epoch() + Days::new(offset))
}

/// Amounts from 0.00 to 10,000.00.
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Inflow or outflow.
pub fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![Just(EntryKind::Inflow), Just(EntryKind::Outflow)]
}

/// Any status.
pub fn status_strategy() -> impl Strategy<Value = EntryStatus> {
    prop_oneof![
        Just(EntryStatus::Pending),
        Just(EntryStatus::Settled),
        Just(EntryStatus::Canceled)
    ]
}

/// Entries posted to one of `accounts` (or none) with one of `categories` (or none).
pub fn entry_strategy(
    accounts: Vec<AccountId>,
    categories: Vec<CategoryId>,
) -> impl Strategy<Value = LedgerEntry> {
    let account = optional_id(accounts);
    let category = optional_id(categories);
    (
        kind_strategy(),
        amount_strategy(),
        date_strategy(),
        0u64..10,
        status_strategy(),
        account,
        category,
    )
        .prop_map(|(kind, amount, due, delay, status, account_id, category_id)| {
            let mut entry = LedgerEntry::new(kind, amount, due);
            entry.status = status;
            if status == EntryStatus::Settled {
                entry.settled_date = Some(due + Days::new(delay));
            }
            entry.account_id = account_id;
            entry.category_id = category_id;
            entry
        })
}

/// `None` or one of `ids`; always `None` when `ids` is empty.
fn optional_id<T>(ids: Vec<T>) -> BoxedStrategy<Option<T>>
where
    T: Clone + std::fmt::Debug + 'static,
{
    if ids.is_empty() {
        Just(None).boxed()
    } else {
        proptest::option::of(proptest::sample::select(ids)).boxed()
    }
}

/// A vector of up to `max_len` entries.
pub fn entries_strategy(
    accounts: Vec<AccountId>,
    categories: Vec<CategoryId>,
    max_len: usize,
) -> impl Strategy<Value = Vec<LedgerEntry>> {
    prop::collection::vec(entry_strategy(accounts, categories), 0..=max_len)
}
