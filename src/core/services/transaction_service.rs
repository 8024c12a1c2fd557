//! Business logic helpers for managing transactions.

use tracing::debug;

use crate::domain::{Transaction, TransactionId};
use crate::ledger::Ledger;

/// Thin, logged wrappers over the ledger's mutating operations.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    pub fn add(ledger: &mut Ledger, transaction: Transaction) -> TransactionId {
        debug!(
            id = %transaction.id(),
            kind = %transaction.kind(),
            amount = %transaction.amount(),
            "adding transaction"
        );
        ledger.add(transaction)
    }

    /// Removes the transaction identified by `id`. Missing ids are not an error.
    pub fn remove(ledger: &mut Ledger, id: TransactionId) -> Option<Transaction> {
        let removed = ledger.remove(id);
        match &removed {
            Some(_) => debug!(%id, "removed transaction"),
            None => debug!(%id, "remove ignored; transaction not found"),
        }
        removed
    }
}
