use crate::domain::{Transaction, TransactionId};

/// In-memory, newest-first collection of the session's transactions.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `transaction`; the ledger keeps no cap and does no dedup.
    pub fn add(&mut self, transaction: Transaction) -> TransactionId {
        let id = transaction.id();
        self.transactions.insert(0, transaction);
        id
    }

    /// Removes the entry with `id`, keeping the order of the others.
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id() == id)?;
        Some(self.transactions.remove(index))
    }

    /// Transactions in display order, newest first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id() == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, TransactionKind};
    use rust_decimal::Decimal;

    fn txn(id: u64, description: &str) -> Transaction {
        Transaction::new(
            TransactionId(id),
            description.into(),
            Decimal::new(100, 2),
            Category::Other,
            TransactionKind::Expense,
            "Jan 1, 2024".into(),
        )
    }

    fn ids(ledger: &Ledger) -> Vec<u64> {
        ledger.all().iter().map(|t| t.id().value()).collect()
    }

    #[test]
    fn add_prepends() {
        let mut ledger = Ledger::new();
        ledger.add(txn(1, "first"));
        ledger.add(txn(2, "second"));
        ledger.add(txn(3, "third"));
        assert_eq!(ids(&ledger), vec![3, 2, 1]);
        assert_eq!(ledger.all()[0].description(), "third");
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut ledger = Ledger::new();
        for id in 1..=4 {
            ledger.add(txn(id, "row"));
        }
        let removed = ledger.remove(TransactionId(3)).expect("present");
        assert_eq!(removed.id(), TransactionId(3));
        assert_eq!(ids(&ledger), vec![4, 2, 1]);
    }

    #[test]
    fn remove_unknown_is_noop_and_idempotent() {
        let mut ledger = Ledger::new();
        ledger.add(txn(1, "only"));
        assert!(ledger.remove(TransactionId(9)).is_none());
        assert!(ledger.remove(TransactionId(1)).is_some());
        assert!(ledger.remove(TransactionId(1)).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn get_finds_by_id() {
        let mut ledger = Ledger::new();
        ledger.add(txn(5, "lunch"));
        assert_eq!(ledger.get(TransactionId(5)).map(|t| t.description()), Some("lunch"));
        assert!(ledger.get(TransactionId(6)).is_none());
        assert_eq!(ledger.len(), 1);
    }
}
