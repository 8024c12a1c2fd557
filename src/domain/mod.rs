pub mod category;
pub mod common;
pub mod transaction;

pub use category::Category;
pub use common::TransactionId;
pub use transaction::{RawTransaction, Transaction, TransactionKind};
