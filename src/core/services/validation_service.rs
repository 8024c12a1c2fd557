//! Gate between raw form fields and ledger transactions.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::core::clock::Clock;
use crate::currency::{format_date, LocaleConfig, DISPLAY_PRECISION};
use crate::domain::{RawTransaction, Transaction};
use crate::errors::{Result, TrackerError};
use crate::ledger::IdSequence;

/// Largest accepted amount (10^15). Keeps ledger totals far inside the
/// range of `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

pub struct ValidationService;

impl ValidationService {
    /// Builds a transaction from `raw`, stamping an id from `ids` and today's
    /// date from `clock`. Category and kind are taken as given.
    pub fn validate(
        raw: &RawTransaction,
        ids: &mut IdSequence,
        clock: &dyn Clock,
        locale: &LocaleConfig,
    ) -> Result<Transaction> {
        let description = Self::parse_description(&raw.description).inspect_err(|err| {
            warn!(error = %err, "rejected transaction description");
        })?;
        let amount = Self::parse_amount(&raw.amount).inspect_err(|err| {
            warn!(error = %err, "rejected transaction amount");
        })?;

        let id = ids.next_id(clock.now_millis());
        let date = format_date(clock.today(), locale.date_format);
        Ok(Transaction::new(
            id,
            description,
            amount,
            raw.category.clone(),
            raw.kind,
            date,
        ))
    }

    pub fn parse_description(raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::invalid_input("description must not be empty"));
        }
        Ok(trimmed.to_string())
    }

    /// Accepts plain (`4.50`) and scientific (`4.5e1`) notation. Anything
    /// that is not a finite, strictly positive number of whole cents up to
    /// [`MAX_AMOUNT`] is rejected.
    pub fn parse_amount(raw: &str) -> Result<Decimal> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::invalid_input("amount is required"));
        }
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| {
                TrackerError::invalid_input(format!("amount `{trimmed}` is not a finite number"))
            })?;
        if amount <= Decimal::ZERO {
            return Err(TrackerError::invalid_input(format!(
                "amount must be greater than zero, got {amount}"
            )));
        }
        if amount > MAX_AMOUNT {
            return Err(TrackerError::invalid_input(format!(
                "amount must not exceed {MAX_AMOUNT}, got {amount}"
            )));
        }
        let amount = amount.normalize();
        if amount.scale() > DISPLAY_PRECISION {
            return Err(TrackerError::invalid_input(format!(
                "amount {amount} has more than {DISPLAY_PRECISION} decimal places"
            )));
        }
        Ok(amount)
    }
}
