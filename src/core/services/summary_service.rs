use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Transaction, TransactionKind};

/// Exact totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

pub struct SummaryService;

impl SummaryService {
    /// Sums incomes and expenses with decimal arithmetic, so the result is
    /// independent of order and free of binary floating-point drift.
    pub fn summarize(transactions: &[Transaction]) -> Summary {
        let (income, expenses) = transactions.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, expenses), txn| match txn.kind() {
                TransactionKind::Income => (income + txn.amount(), expenses),
                TransactionKind::Expense => (income, expenses + txn.amount()),
            },
        );
        Summary {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}
