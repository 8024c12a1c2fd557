//! Session ledger and identifier allocation.

pub mod ids;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use ids::IdSequence;
pub use ledger::Ledger;
