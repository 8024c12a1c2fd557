mod common;

use common::{fixed_clock, fixed_session, raw};
use expense_tracker::{
    core::services::{
        DisplaySettings, LedgerView, Polarity, ProjectionService, SummaryService,
        TransactionService, ValidationService, MAX_AMOUNT,
    },
    core::Severity,
    currency::{parse_display_amount, LocaleConfig},
    domain::{Category, TransactionKind},
    ledger::{IdSequence, Ledger},
};
use rust_decimal::Decimal;

#[test]
fn add_places_fresh_transaction_first() {
    let mut ledger = Ledger::new();
    let mut ids = IdSequence::new();
    let clock = fixed_clock();
    let locale = LocaleConfig::default();
    let mut seen = Vec::new();
    for (description, amount) in [("Lunch", "12.00"), ("Taxi", "18.40"), ("Cinema", "9.99")] {
        let txn = ValidationService::validate(
            &raw(description, amount, Category::Other, TransactionKind::Expense),
            &mut ids,
            &clock,
            &locale,
        )
        .expect("valid input");
        let id = TransactionService::add(&mut ledger, txn);
        assert_eq!(ledger.all()[0].id(), id);
        assert_eq!(ledger.all()[0].description(), description);
        assert!(!seen.contains(&id));
        seen.push(id);
    }
}

#[test]
fn coffee_scenario() {
    let mut session = fixed_session();
    let refresh = session.add_transaction(raw(
        "Coffee",
        "4.50",
        Category::Food,
        TransactionKind::Expense,
    ));
    let summary = session.summary();
    assert_eq!(summary.balance, Decimal::new(-450, 2));
    assert_eq!(summary.expenses, Decimal::new(450, 2));
    assert_eq!(summary.income, Decimal::ZERO);
    assert_eq!(refresh.summary.balance, "$-4.50");
    assert_eq!(refresh.summary.polarity, Polarity::Negative);
}

#[test]
fn income_then_expense_scenario() {
    let mut session = fixed_session();
    session.add_transaction(raw("Salary", "1000.00", Category::Other, TransactionKind::Income));
    let refresh = session.add_transaction(raw(
        "Groceries",
        "250.00",
        Category::Shopping,
        TransactionKind::Expense,
    ));
    assert_eq!(session.summary().balance, Decimal::new(75_000, 2));
    assert_eq!(refresh.summary.balance, "$750.00");
    assert_eq!(refresh.summary.income, "$1000.00");
    assert_eq!(refresh.summary.expenses, "$250.00");
    assert_eq!(refresh.summary.polarity, Polarity::NonNegative);
}

#[test]
fn invalid_submission_is_reported_and_ignored() {
    let mut session = fixed_session();
    let refresh = session.add_transaction(raw("", "abc", Category::Food, TransactionKind::Expense));
    assert!(session.ledger().is_empty());
    assert!(refresh.view.is_empty());
    assert_eq!(refresh.notice.map(|n| n.severity), Some(Severity::Error));

    let err = ValidationService::validate(
        &raw("", "abc", Category::Food, TransactionKind::Expense),
        &mut IdSequence::new(),
        &fixed_clock(),
        &LocaleConfig::default(),
    )
    .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn amount_boundaries_at_the_session_level() {
    let mut session = fixed_session();
    for rejected in ["0", "-1", "-0.01"] {
        session.add_transaction(raw("Edge", rejected, Category::Other, TransactionKind::Income));
        assert!(session.ledger().is_empty(), "accepted {rejected}");
    }
    session.add_transaction(raw("Edge", "0.01", Category::Other, TransactionKind::Income));
    assert_eq!(session.ledger().len(), 1);
    assert_eq!(session.refresh().summary.balance, "$0.01");
}

#[test]
fn largest_amounts_add_up_without_overflow() {
    let mut session = fixed_session();
    let max = MAX_AMOUNT.to_string();
    for _ in 0..3 {
        session.add_transaction(raw("Windfall", &max, Category::Other, TransactionKind::Income));
    }
    let refresh = session.add_transaction(raw(
        "Too much",
        "50000000000000000000000000000",
        Category::Other,
        TransactionKind::Income,
    ));
    assert_eq!(session.ledger().len(), 3);
    assert_eq!(refresh.notice.map(|n| n.severity), Some(Severity::Error));
    assert_eq!(session.summary().income, MAX_AMOUNT * Decimal::from(3));
}

#[test]
fn displayed_rows_sum_to_displayed_balance_for_small_amounts() {
    let mut session = fixed_session();
    for _ in 0..3 {
        session.add_transaction(raw("Crumb", "0.004", Category::Food, TransactionKind::Income));
    }
    assert!(session.ledger().is_empty());

    for (amount, kind) in [
        ("0.01", TransactionKind::Income),
        ("0.01", TransactionKind::Income),
        ("0.01", TransactionKind::Income),
        ("0.05", TransactionKind::Expense),
    ] {
        session.add_transaction(raw("Cent", amount, Category::Other, kind));
    }
    let refresh = session.refresh();
    let settings = session.settings();
    let row_sum: Decimal = refresh
        .view
        .rows()
        .iter()
        .map(|row| parse_display_amount(&row.amount, &settings.currency, &settings.locale))
        .map(|value| value.expect("row amount parses"))
        .sum();
    let balance = parse_display_amount(&refresh.summary.balance, &settings.currency, &settings.locale)
        .expect("balance parses");
    assert_eq!(row_sum, balance);
    assert_eq!(refresh.summary.balance, "$-0.02");
}

#[test]
fn remove_twice_matches_remove_once() {
    let mut once = fixed_session();
    let mut twice = fixed_session();
    for session in [&mut once, &mut twice] {
        session.add_transaction(raw("A", "1", Category::Food, TransactionKind::Expense));
        session.add_transaction(raw("B", "2", Category::Health, TransactionKind::Expense));
    }
    let target = once.ledger().all()[1].id();
    let after_once = once.delete_transaction(target);
    twice.delete_transaction(target);
    let after_twice = twice.delete_transaction(target);
    assert_eq!(after_once.view, after_twice.view);
    assert_eq!(after_once.summary, after_twice.summary);
    assert_eq!(once.ledger().all(), twice.ledger().all());
}

#[test]
fn summary_ignores_order() {
    let mut session = fixed_session();
    for (amount, kind) in [
        ("10.10", TransactionKind::Income),
        ("0.07", TransactionKind::Expense),
        ("333.33", TransactionKind::Expense),
        ("1234.56", TransactionKind::Income),
    ] {
        session.add_transaction(raw("x", amount, Category::Other, kind));
    }
    let mut txns = session.ledger().all().to_vec();
    let expected = SummaryService::summarize(&txns);
    txns.rotate_left(1);
    assert_eq!(SummaryService::summarize(&txns), expected);
    txns.reverse();
    assert_eq!(SummaryService::summarize(&txns), expected);
}

#[test]
fn empty_ledger_projects_placeholder() {
    let view = ProjectionService::project_rows(Ledger::new().all(), &DisplaySettings::default());
    assert!(matches!(view, LedgerView::Empty(_)));
}
