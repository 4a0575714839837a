//! End-to-end dashboard rendering over an in-memory store.

use chrono::NaiveDate;
use fluxo_core::balance::AccountFilter;
use fluxo_core::dashboard::{DashboardParams, DashboardService};
use fluxo_core::ledger::{Account, Category, EntryKind, LedgerEntry};
use fluxo_core::period::DateRange;
use fluxo_core::store::{InMemoryStore, LedgerSnapshot};
use fluxo_core::time::FixedClock;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Fixture {
    store: InMemoryStore,
    bank: Account,
    card: Account,
}

fn fixture() -> Fixture {
    let bank = Account::ordinary("Banco", date(2024, 1, 1)).with_opening_balance(dec!(1000));
    let card = Account::card("Visa", date(2024, 1, 1), dec!(2000));
    let vendas = Category::new("Vendas", EntryKind::Inflow);
    let imposto = Category::new("Imposto de Renda", EntryKind::Outflow);
    let insumos = Category::new("Insumos", EntryKind::Outflow);
    let aluguel = Category::new("Aluguel", EntryKind::Outflow);

    let mut store = InMemoryStore::default();
    store.insert_entry(
        LedgerEntry::new(EntryKind::Inflow, dec!(1500), date(2024, 1, 5))
            .on_account(bank.id)
            .in_category(vendas.id)
            .settled_on(date(2024, 1, 5)),
    );
    store.insert_entry(
        LedgerEntry::new(EntryKind::Outflow, dec!(150), date(2024, 1, 10))
            .on_account(bank.id)
            .in_category(imposto.id)
            .settled_on(date(2024, 1, 10)),
    );
    store.insert_entry(
        LedgerEntry::new(EntryKind::Outflow, dec!(400), date(2024, 1, 12))
            .on_account(card.id)
            .in_category(insumos.id)
            .settled_on(date(2024, 1, 12)),
    );
    store.insert_entry(
        LedgerEntry::new(EntryKind::Outflow, dec!(600), date(2024, 1, 20))
            .on_account(bank.id)
            .in_category(aluguel.id),
    );
    store.insert_entry(
        LedgerEntry::new(EntryKind::Inflow, dec!(250), date(2024, 1, 25))
            .on_account(bank.id)
            .in_category(vendas.id),
    );
    store.insert_entry(
        LedgerEntry::new(EntryKind::Outflow, dec!(300), date(2024, 2, 3))
            .on_account(card.id)
            .in_category(insumos.id),
    );
    store.insert_account(bank.clone());
    store.insert_account(card.clone());
    for category in [vendas, imposto, insumos, aluguel] {
        store.insert_category(category);
    }

    Fixture { store, bank, card }
}

#[test]
fn test_render_january_dashboard() {
    let Fixture { store, bank, card } = fixture();
    let service = DashboardService::default();
    let params = DashboardParams::current_month(&FixedClock::on(date(2024, 1, 22)));

    let view = service.render_from_store(&store, &params).unwrap();

    let bank_balance = view.balances.account(bank.id).unwrap();
    assert_eq!(bank_balance.confirmed, dec!(2350));
    assert_eq!(bank_balance.projected, dec!(2000));
    let card_balance = view.balances.account(card.id).unwrap();
    assert_eq!(card_balance.confirmed, dec!(-400));
    assert_eq!(card_balance.projected, dec!(-700));

    assert_eq!(view.cash_flow.points.len(), 31);
    assert_eq!(view.cash_flow.opening_balance, Decimal::ZERO);
    assert_eq!(view.cash_flow.closing_balance, dec!(600));

    assert_eq!(view.payables.overdue.len(), 1);
    assert_eq!(view.payables.total_overdue, dec!(600));
    assert_eq!(view.payables.upcoming.len(), 1);
    assert_eq!(view.receivables.upcoming.len(), 1);
    assert_eq!(view.receivables.total_overdue, Decimal::ZERO);

    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].current_cycle_total, dec!(400));
    assert_eq!(view.cards[0].next_cycle_total, dec!(300));
    assert_eq!(view.cards[0].scheduled_pending, dec!(300));
    assert_eq!(view.cards[0].available_limit, dec!(1300));

    let dre = &view.income_statement;
    assert_eq!(dre.gross_revenue, dec!(1500));
    assert_eq!(dre.deductions, dec!(150));
    assert_eq!(dre.costs, dec!(400));
    assert_eq!(dre.operating_expenses, Decimal::ZERO);
    assert_eq!(dre.net_profit, dec!(950));

    assert!(view.diagnostics.is_clean());
}

#[test]
fn test_account_filter_scopes_account_views_only() {
    let Fixture { store, bank, .. } = fixture();
    let snapshot = LedgerSnapshot::fetch(&store).unwrap();
    let params = DashboardParams::month_of(date(2024, 1, 22))
        .with_account_filter(AccountFilter::new().with_account(bank.id));

    let view = DashboardService::default().render(&snapshot, &params);

    assert_eq!(view.balances.accounts.len(), 1);
    assert!(view.cards.is_empty());
    assert!(view.payables.upcoming.is_empty());
    assert_eq!(view.cash_flow.closing_balance, dec!(1000));
    assert_eq!(view.income_statement.net_profit, dec!(950));
}

#[test]
fn test_rendering_twice_is_identical() {
    let Fixture { store, .. } = fixture();
    let snapshot = LedgerSnapshot::fetch(&store).unwrap();
    let mut params = DashboardParams::month_of(date(2024, 1, 22));
    params.cash_flow_range = DateRange::new(date(2023, 12, 1), date(2024, 2, 29));

    let service = DashboardService::default();
    assert_eq!(service.render(&snapshot, &params), service.render(&snapshot, &params));
}

#[test]
fn test_empty_store_renders_zeroes() {
    let view = DashboardService::default()
        .render_from_store(&InMemoryStore::default(), &DashboardParams::month_of(date(2024, 1, 1)))
        .unwrap();

    assert!(view.balances.accounts.is_empty());
    assert_eq!(view.cash_flow.points.len(), 31);
    assert!(view.cash_flow.points.iter().all(|p| p.running_balance.is_zero()));
    assert!(view.cards.is_empty());
    assert_eq!(view.income_statement.net_profit, Decimal::ZERO);
}
