//! Tests for income statement composition.

use chrono::NaiveDate;
use fluxo_shared::types::CategoryId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::IncomeStatementComposer;
use super::types::IncomeStatement;
use crate::classifier::{DreBucket, EntryClassifier};
use crate::ledger::{Category, EntryKind, EntryStatus, LedgerEntry};
use crate::period::DateRange;
use crate::test_support::entries_strategy;

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

fn january() -> DateRange {
    DateRange::new(date(1, 1), date(1, 31))
}

fn categories() -> Vec<Category> {
    vec![
        Category::new("Vendas", EntryKind::Inflow),
        Category::new("Serviços", EntryKind::Inflow),
        Category::new("Imposto de Renda", EntryKind::Outflow),
        Category::new("Matéria-prima", EntryKind::Outflow),
        Category::new("Aluguel", EntryKind::Outflow),
        Category::new("Custo com taxa", EntryKind::Outflow),
    ]
}

fn compose_january(entries: &[LedgerEntry], categories: &[Category]) -> IncomeStatement {
    IncomeStatementComposer::compose(entries, categories, &EntryClassifier::default(), january())
}

fn compose_all(entries: &[LedgerEntry]) -> IncomeStatement {
    IncomeStatementComposer::compose_all(entries, &categories(), &EntryClassifier::default())
}

fn settled(kind: EntryKind, amount: Decimal, due: NaiveDate, category: &Category) -> LedgerEntry {
    LedgerEntry::new(kind, amount, due).in_category(category.id).settled_on(due)
}

#[test]
fn test_reference_statement() {
    let categories = categories();
    let entries = vec![
        settled(EntryKind::Inflow, dec!(1000), date(1, 5), &categories[0]),
        settled(EntryKind::Outflow, dec!(200), date(1, 6), &categories[2]),
        settled(EntryKind::Outflow, dec!(300), date(1, 7), &categories[4]),
    ];

    let statement = compose_january(&entries, &categories);

    assert_eq!(statement.gross_revenue, dec!(1000));
    assert_eq!(statement.deductions, dec!(200));
    assert_eq!(statement.net_revenue, dec!(800));
    assert_eq!(statement.costs, Decimal::ZERO);
    assert_eq!(statement.gross_profit, dec!(800));
    assert_eq!(statement.operating_expenses, dec!(300));
    assert_eq!(statement.net_profit, dec!(500));
    assert_eq!(statement.period, Some(january()));
}

#[test]
fn test_only_settled_entries_in_period_count() {
    let categories = categories();
    let entries = vec![
        settled(EntryKind::Inflow, dec!(100), date(1, 31), &categories[0]),
        settled(EntryKind::Inflow, dec!(900), date(2, 1), &categories[0]),
        LedgerEntry::new(EntryKind::Inflow, dec!(50), date(1, 10)).in_category(categories[0].id),
        LedgerEntry::new(EntryKind::Outflow, dec!(70), date(1, 10)).canceled(),
        settled(EntryKind::Outflow, dec!(40), date(1, 10), &categories[3]),
    ];

    let statement = compose_january(&entries, &categories);

    assert_eq!(statement.gross_revenue, dec!(100));
    assert_eq!(statement.costs, dec!(40));
    assert_eq!(statement.net_profit, dec!(60));
}

#[test]
fn test_deduction_keywords_win_over_cost_keywords() {
    let categories = categories();
    let entries = vec![settled(EntryKind::Outflow, dec!(80), date(1, 3), &categories[5])];

    let statement = compose_january(&entries, &categories);

    assert_eq!(statement.deductions, dec!(80));
    assert_eq!(statement.costs, Decimal::ZERO);
    assert_eq!(statement.expense_by_category[0].bucket, DreBucket::Deduction);
}

#[test]
fn test_category_breakdowns() {
    let categories = categories();
    let entries = vec![
        settled(EntryKind::Inflow, dec!(300), date(1, 2), &categories[1]),
        settled(EntryKind::Inflow, dec!(700), date(1, 3), &categories[0]),
        settled(EntryKind::Inflow, dec!(100), date(1, 4), &categories[0]),
        LedgerEntry::new(EntryKind::Inflow, dec!(25), date(1, 4)).settled_on(date(1, 4)),
        LedgerEntry::new(EntryKind::Outflow, dec!(15), date(1, 4)).settled_on(date(1, 4)),
        settled(EntryKind::Outflow, dec!(0), date(1, 4), &categories[4]),
    ];

    let statement = compose_january(&entries, &categories);

    let revenue: Vec<_> = statement
        .revenue_by_category
        .iter()
        .map(|r| (r.category_name.as_deref(), r.total, r.entry_count))
        .collect();
    assert_eq!(
        revenue,
        vec![
            (Some("Vendas"), dec!(800), 2),
            (Some("Serviços"), dec!(300), 1),
            (None, dec!(25), 1),
        ]
    );

    assert_eq!(statement.expense_by_category.len(), 1);
    assert_eq!(statement.expense_by_category[0].category_id, None);
    assert_eq!(statement.expense_by_category[0].bucket, DreBucket::OperatingExpense);
    assert_eq!(statement.operating_expenses, dec!(15));
}

#[test]
fn test_unknown_and_mismatched_categories_are_flagged() {
    let categories = categories();
    let mut unknown = LedgerEntry::new(EntryKind::Outflow, dec!(10), date(1, 5))
        .settled_on(date(1, 5));
    unknown.category_id = Some(CategoryId::new());
    let mismatched = settled(EntryKind::Outflow, dec!(20), date(1, 5), &categories[0]);

    let statement = IncomeStatementComposer::compose(
        &[unknown, mismatched],
        &categories,
        &EntryClassifier::default(),
        january(),
    );

    assert_eq!(statement.diagnostics.missing_category, 1);
    assert_eq!(statement.diagnostics.category_kind_mismatch, 1);
    assert_eq!(statement.operating_expenses, dec!(30));
    assert_eq!(statement.gross_revenue, Decimal::ZERO);
}

#[test]
fn test_empty_input() {
    let statement =
        IncomeStatementComposer::compose(&[], &[], &EntryClassifier::default(), january());

    assert_eq!(statement.net_profit, Decimal::ZERO);
    assert!(statement.revenue_by_category.is_empty());
    assert!(statement.expense_by_category.is_empty());
    assert!(statement.diagnostics.is_clean());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Expense buckets partition settled outflows even when every category is unknown.
    #[test]
    fn prop_unknown_categories_still_partition_outflows(
        entries in entries_strategy(vec![], vec![CategoryId::new(), CategoryId::new()], 40),
    ) {
        let statement = compose_all(&entries);

        let settled_outflow: Decimal = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Outflow && e.status == EntryStatus::Settled)
            .map(|e| e.amount)
            .sum();
        prop_assert_eq!(statement.total_outflow(), settled_outflow);
    }

    /// Expense buckets partition settled outflows: nothing dropped, nothing doubled.
    #[test]
    fn prop_named_categories_partition_outflows(
        picks in prop::collection::vec((0usize..7, 0i64..1_000_000, any::<bool>()), 0..40),
    ) {
        let categories = categories();
        let entries: Vec<LedgerEntry> = picks
            .iter()
            .map(|(pick, cents, is_settled)| {
                let amount = Decimal::new(*cents, 2);
                let mut entry = LedgerEntry::new(EntryKind::Outflow, amount, date(1, 15));
                if *is_settled {
                    entry = entry.settled_on(date(1, 15));
                }
                entry.category_id = categories.get(*pick).map(|c| c.id);
                entry
            })
            .collect();

        let statement = compose_january(&entries, &categories);

        let settled_outflow: Decimal = entries
            .iter()
            .filter(|e| e.is_settled())
            .map(|e| e.amount)
            .sum();
        let by_category: Decimal = statement.expense_by_category.iter().map(|e| e.total).sum();
        prop_assert_eq!(statement.total_outflow(), settled_outflow);
        prop_assert_eq!(by_category, settled_outflow);
    }

    /// net profit = gross revenue - deductions - costs - operating expenses.
    #[test]
    fn prop_statement_identity(
        entries in entries_strategy(vec![], vec![], 40),
    ) {
        let statement = compose_all(&entries);

        prop_assert_eq!(
            statement.net_profit,
            statement.gross_revenue
                - statement.deductions
                - statement.costs
                - statement.operating_expenses
        );
        prop_assert_eq!(statement.net_revenue, statement.gross_revenue - statement.deductions);
        prop_assert_eq!(statement.gross_profit, statement.net_revenue - statement.costs);
        let by_category: Decimal = statement.revenue_by_category.iter().map(|r| r.total).sum();
        prop_assert_eq!(by_category, statement.gross_revenue);
    }
}
