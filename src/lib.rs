#![doc(test(attr(deny(warnings))))]

//! Expense Tracker offers a session-scoped income/expense ledger, exact
//! totals, and a pure projection of ledger state into display rows that any
//! view collaborator can render.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;
pub mod view;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense tracker tracing initialized.");
    });
}
