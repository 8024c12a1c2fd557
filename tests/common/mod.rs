#![allow(dead_code)]

use expense_tracker::{
    core::{services::DisplaySettings, FixedClock, TrackerSession},
    domain::{Category, RawTransaction, TransactionKind},
};

/// Session pinned to 2024-03-05 so dates and ids are deterministic.
pub fn fixed_session() -> TrackerSession {
    TrackerSession::with_clock(DisplaySettings::default(), Box::new(fixed_clock()))
}

pub fn fixed_clock() -> FixedClock {
    FixedClock::on(2024, 3, 5).expect("valid date")
}

pub fn raw(description: &str, amount: &str, category: Category, kind: TransactionKind) -> RawTransaction {
    RawTransaction::new(description, amount, category, kind)
}
