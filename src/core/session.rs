//! Owns one session's ledger and runs the validate, mutate, aggregate and
//! project cycle for every user action.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::notice::{
    Notice, ADDED_MESSAGE, DEFAULT_NOTICE_DURATION, DELETED_MESSAGE, INVALID_INPUT_MESSAGE,
};
use crate::core::services::{
    DisplaySettings, DisplaySummary, LedgerView, ProjectionService, Summary, SummaryService,
    TransactionService, ValidationService,
};
use crate::domain::{RawTransaction, TransactionId};
use crate::ledger::{IdSequence, Ledger};

/// Everything a view needs after one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Refresh {
    pub view: LedgerView,
    pub summary: DisplaySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

pub struct TrackerSession {
    ledger: Ledger,
    ids: IdSequence,
    clock: Box<dyn Clock>,
    settings: DisplaySettings,
    notice_duration: Duration,
}

impl TrackerSession {
    pub fn new(settings: DisplaySettings) -> Self {
        Self::with_clock(settings, Box::new(SystemClock))
    }

    pub fn with_clock(settings: DisplaySettings, clock: Box<dyn Clock>) -> Self {
        Self {
            ledger: Ledger::new(),
            ids: IdSequence::new(),
            clock,
            settings,
            notice_duration: DEFAULT_NOTICE_DURATION,
        }
    }

    pub fn from_config(config: &Config, clock: Box<dyn Clock>) -> Self {
        Self::with_clock(config.display_settings(), clock)
            .with_notice_duration(config.notice_duration())
    }

    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Validates `raw` and, on success, records it. Invalid input never
    /// escapes: it becomes an error notice and the ledger stays unchanged.
    pub fn add_transaction(&mut self, raw: RawTransaction) -> Refresh {
        let validated = ValidationService::validate(
            &raw,
            &mut self.ids,
            self.clock.as_ref(),
            &self.settings.locale,
        );
        let notice = match validated {
            Ok(transaction) => {
                let id = TransactionService::add(&mut self.ledger, transaction);
                info!(%id, total = self.ledger.len(), "transaction added");
                Notice::success(ADDED_MESSAGE, self.notice_duration)
            }
            Err(err) => {
                warn!(error = %err, "transaction rejected");
                Notice::error(INVALID_INPUT_MESSAGE, self.notice_duration)
            }
        };
        self.render(Some(notice))
    }

    /// Removes `id` if present. Deleting twice is harmless.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Refresh {
        TransactionService::remove(&mut self.ledger, id);
        self.render(Some(Notice::info(DELETED_MESSAGE, self.notice_duration)))
    }

    /// Current projection without a notice, used for the first paint.
    pub fn refresh(&self) -> Refresh {
        self.render(None)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn summary(&self) -> Summary {
        SummaryService::summarize(self.ledger.all())
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    fn render(&self, notice: Option<Notice>) -> Refresh {
        let summary = self.summary();
        Refresh {
            view: ProjectionService::project_rows(self.ledger.all(), &self.settings),
            summary: ProjectionService::project_summary(&summary, &self.settings),
            notice,
        }
    }
}
