//! Pure mapping from ledger state to presentation-ready data.
//!
//! Nothing here knows how the output is drawn; views receive plain strings
//! plus a polarity flag and decide styling on their own.

use serde::Serialize;

use crate::core::services::summary_service::Summary;
use crate::currency::{
    format_currency_value, format_signed_amount, round_for_display, CurrencyCode, LocaleConfig,
};
use crate::domain::{Transaction, TransactionId, TransactionKind};

/// Currency and locale used when formatting amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySettings {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: TransactionId,
    pub icon: String,
    pub title: String,
    pub category_label: String,
    pub date: String,
    /// Signed, formatted amount such as `+$12.50`.
    pub amount: String,
    pub kind: TransactionKind,
}

/// Placeholder content shown instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub icon: String,
    pub title: String,
    pub hint: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            icon: "📊".into(),
            title: "No transactions yet".into(),
            hint: "Start tracking your finances above".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "lowercase")]
pub enum LedgerView {
    Empty(EmptyState),
    Rows(Vec<DisplayRow>),
}

impl LedgerView {
    pub fn is_empty(&self) -> bool {
        matches!(self, LedgerView::Empty(_))
    }

    pub fn rows(&self) -> &[DisplayRow] {
        match self {
            LedgerView::Empty(_) => &[],
            LedgerView::Rows(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    NonNegative,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySummary {
    pub balance: String,
    pub income: String,
    pub expenses: String,
    pub polarity: Polarity,
}

pub struct ProjectionService;

impl ProjectionService {
    /// Projects `transactions` in their given order. An empty slice yields
    /// [`LedgerView::Empty`], never an empty row list.
    pub fn project_rows(transactions: &[Transaction], settings: &DisplaySettings) -> LedgerView {
        if transactions.is_empty() {
            return LedgerView::Empty(EmptyState::default());
        }
        LedgerView::Rows(
            transactions
                .iter()
                .map(|txn| Self::project_row(txn, settings))
                .collect(),
        )
    }

    pub fn project_row(txn: &Transaction, settings: &DisplaySettings) -> DisplayRow {
        DisplayRow {
            id: txn.id(),
            icon: txn.category().icon().to_string(),
            title: txn.description().to_string(),
            category_label: txn.category().label(),
            date: txn.date().to_string(),
            amount: format_signed_amount(
                txn.amount(),
                txn.kind(),
                &settings.currency,
                &settings.locale,
            ),
            kind: txn.kind(),
        }
    }

    pub fn project_summary(summary: &Summary, settings: &DisplaySettings) -> DisplaySummary {
        let polarity = if round_for_display(summary.balance).is_sign_negative()
            && !round_for_display(summary.balance).is_zero()
        {
            Polarity::Negative
        } else {
            Polarity::NonNegative
        };
        let format = |value| format_currency_value(value, &settings.currency, &settings.locale);
        DisplaySummary {
            balance: format(summary.balance),
            income: format(summary.income),
            expenses: format(summary.expenses),
            polarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::parse_display_amount;
    use crate::domain::Category;
    use rust_decimal::Decimal;

    fn txn(id: u64, cents: i64, category: Category, kind: TransactionKind) -> Transaction {
        Transaction::new(
            TransactionId(id),
            format!("item {id}"),
            Decimal::new(cents, 2),
            category,
            kind,
            "Mar 5, 2024".into(),
        )
    }

    #[test]
    fn empty_input_projects_placeholder() {
        let view = ProjectionService::project_rows(&[], &DisplaySettings::default());
        assert!(view.is_empty());
        assert!(view.rows().is_empty());
        assert_eq!(view, LedgerView::Empty(EmptyState::default()));
    }

    #[test]
    fn rows_carry_icon_label_and_signed_amount() {
        let txns = [
            txn(2, 450, Category::Food, TransactionKind::Expense),
            txn(1, 125_050, Category::Other, TransactionKind::Income),
        ];
        let view = ProjectionService::project_rows(&txns, &DisplaySettings::default());
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].icon, "🍔");
        assert_eq!(rows[0].category_label, "Food");
        assert_eq!(rows[0].amount, "-$4.50");
        assert_eq!(rows[0].id, TransactionId(2));
        assert_eq!(rows[1].amount, "+$1250.50");
        assert_eq!(rows[1].date, "Mar 5, 2024");
    }

    #[test]
    fn unrecognized_category_falls_back() {
        let row = ProjectionService::project_row(
            &txn(1, 100, Category::from_raw("pets"), TransactionKind::Expense),
            &DisplaySettings::default(),
        );
        assert_eq!(row.icon, "📌");
        assert_eq!(row.category_label, "Pets");
    }

    #[test]
    fn summary_polarity_flags_negative_balance() {
        let settings = DisplaySettings::default();
        let negative = Summary {
            income: Decimal::ZERO,
            expenses: Decimal::new(450, 2),
            balance: Decimal::new(-450, 2),
        };
        let display = ProjectionService::project_summary(&negative, &settings);
        assert_eq!(display.balance, "$-4.50");
        assert_eq!(display.expenses, "$4.50");
        assert_eq!(display.income, "$0.00");
        assert_eq!(display.polarity, Polarity::Negative);

        let zero = ProjectionService::project_summary(&Summary::default(), &settings);
        assert_eq!(zero.polarity, Polarity::NonNegative);
    }

    #[test]
    fn displayed_row_amounts_sum_to_displayed_balance() {
        let settings = DisplaySettings::default();
        let txns = [
            txn(1, 100_000, Category::Other, TransactionKind::Income),
            txn(2, 25_000, Category::Shopping, TransactionKind::Expense),
            txn(3, 1_999, Category::Health, TransactionKind::Expense),
            txn(4, 1, Category::Food, TransactionKind::Income),
        ];
        let summary = crate::core::services::SummaryService::summarize(&txns);
        let display = ProjectionService::project_summary(&summary, &settings);
        let total: Decimal = ProjectionService::project_rows(&txns, &settings)
            .rows()
            .iter()
            .map(|row| parse_display_amount(&row.amount, &settings.currency, &settings.locale))
            .map(Option::unwrap)
            .sum();
        let balance =
            parse_display_amount(&display.balance, &settings.currency, &settings.locale).unwrap();
        assert_eq!(total, balance);
        assert_eq!(display.balance, "$730.02");
    }
}
