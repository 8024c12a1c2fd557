use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::common::TransactionId;
use crate::errors::TrackerError;

/// Direction of a transaction; decides its sign in the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Prefix used when displaying an amount of this kind.
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl Default for TransactionKind {
    fn default() -> Self {
        TransactionKind::Expense
    }
}

impl FromStr for TransactionKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" | "+" => Ok(TransactionKind::Income),
            "expense" | "out" | "-" => Ok(TransactionKind::Expense),
            other => Err(TrackerError::invalid_input(format!(
                "unknown transaction type `{other}`; use income or expense"
            ))),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated form fields as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub description: String,
    pub amount: String,
    pub category: Category,
    pub kind: TransactionKind,
}

impl RawTransaction {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
        kind: TransactionKind,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category,
            kind,
        }
    }
}

/// A recorded income or expense. Only the validator builds one, and it never
/// changes afterwards.
///
/// Transactions cannot be read back from serialized data:
///
/// ```compile_fail
/// let _: expense_tracker::domain::Transaction = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    description: String,
    amount: Decimal,
    category: Category,
    kind: TransactionKind,
    date: String,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        description: String,
        amount: Decimal,
        category: Category,
        kind: TransactionKind,
        date: String,
    ) -> Self {
        Self {
            id,
            description,
            amount,
            category,
            kind,
            date,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount with the sign implied by its kind.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}
