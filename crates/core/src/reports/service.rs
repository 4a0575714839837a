//! Income statement composition.

use std::collections::HashMap;

use fluxo_shared::types::CategoryId;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{CategoryExpense, CategoryRevenue, IncomeStatement};
use crate::classifier::{DreBucket, EntryClassifier};
use crate::diagnostics::{Diagnostics, EntryIssue};
use crate::ledger::{Category, EntryKind, LedgerEntry};
use crate::period::DateRange;

#[derive(Debug, Default)]
struct Line {
    total: Decimal,
    entry_count: usize,
}

/// Composes income statements from settled entries.
pub struct IncomeStatementComposer;

impl IncomeStatementComposer {
    /// Composes the statement for entries due within `period`.
    #[must_use]
    pub fn compose(
        entries: &[LedgerEntry],
        categories: &[Category],
        classifier: &EntryClassifier,
        period: DateRange,
    ) -> IncomeStatement {
        let in_period = entries.iter().filter(|e| period.contains(e.due_date));
        let mut statement = Self::fold(in_period, categories, classifier);
        statement.period = Some(period);
        statement
    }

    /// Composes the statement over an entry set the caller already filtered.
    #[must_use]
    pub fn compose_all(
        entries: &[LedgerEntry],
        categories: &[Category],
        classifier: &EntryClassifier,
    ) -> IncomeStatement {
        Self::fold(entries.iter(), categories, classifier)
    }

    fn fold<'a>(
        entries: impl Iterator<Item = &'a LedgerEntry>,
        categories: &[Category],
        classifier: &EntryClassifier,
    ) -> IncomeStatement {
        let index: HashMap<CategoryId, &Category> = categories.iter().map(|c| (c.id, c)).collect();
        let mut diagnostics = Diagnostics::default();
        let mut revenue: HashMap<Option<CategoryId>, Line> = HashMap::new();
        let mut expenses: HashMap<Option<CategoryId>, (DreBucket, Line)> = HashMap::new();
        let mut gross_revenue = Decimal::ZERO;
        let mut deductions = Decimal::ZERO;
        let mut costs = Decimal::ZERO;
        let mut operating_expenses = Decimal::ZERO;

        for entry in entries.filter(|e| e.is_settled()) {
            let category = match entry.category_id {
                Some(id) => {
                    let found = index.get(&id).copied();
                    match found {
                        None => diagnostics.record(entry, EntryIssue::MissingCategory),
                        Some(c) if c.kind != entry.kind => {
                            diagnostics.record(entry, EntryIssue::CategoryKindMismatch);
                        }
                        Some(_) => {}
                    }
                    found
                }
                None => None,
            };
            let key = category.map(|c| c.id);

            match entry.kind {
                EntryKind::Inflow => {
                    gross_revenue += entry.amount;
                    let line = revenue.entry(key).or_default();
                    line.total += entry.amount;
                    line.entry_count += 1;
                }
                EntryKind::Outflow => {
                    let bucket = classifier.classify(entry, category);
                    match bucket {
                        DreBucket::Deduction => deductions += entry.amount,
                        DreBucket::Cost => costs += entry.amount,
                        DreBucket::OperatingExpense | DreBucket::None => {
                            operating_expenses += entry.amount;
                        }
                    }
                    let (_, line) = expenses
                        .entry(key)
                        .or_insert_with(|| (bucket, Line::default()));
                    line.total += entry.amount;
                    line.entry_count += 1;
                }
            }
        }

        let name_of = |id: Option<CategoryId>| {
            id.and_then(|id| index.get(&id)).map(|c| c.name.clone())
        };

        let mut revenue_by_category: Vec<CategoryRevenue> = revenue
            .into_iter()
            .filter(|(_, line)| !line.total.is_zero())
            .map(|(id, line)| CategoryRevenue {
                category_id: id,
                category_name: name_of(id),
                total: line.total,
                entry_count: line.entry_count,
            })
            .collect();
        revenue_by_category.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        let mut expense_by_category: Vec<CategoryExpense> = expenses
            .into_iter()
            .filter(|(_, (_, line))| !line.total.is_zero())
            .map(|(id, (bucket, line))| CategoryExpense {
                category_id: id,
                category_name: name_of(id),
                bucket,
                total: line.total,
                entry_count: line.entry_count,
            })
            .collect();
        expense_by_category.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        let net_revenue = gross_revenue - deductions;
        let gross_profit = net_revenue - costs;
        let net_profit = gross_profit - operating_expenses;

        debug!(
            %gross_revenue,
            %deductions,
            %costs,
            %operating_expenses,
            %net_profit,
            "composed income statement"
        );

        IncomeStatement {
            period: None,
            gross_revenue,
            deductions,
            net_revenue,
            costs,
            gross_profit,
            operating_expenses,
            net_profit,
            revenue_by_category,
            expense_by_category,
            diagnostics,
        }
    }
}
