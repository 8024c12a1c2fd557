pub mod projection_service;
pub mod summary_service;
pub mod transaction_service;
pub mod validation_service;

pub use projection_service::{
    DisplayRow, DisplaySettings, DisplaySummary, EmptyState, LedgerView, Polarity,
    ProjectionService,
};
pub use summary_service::{Summary, SummaryService};
pub use transaction_service::TransactionService;
pub use validation_service::{ValidationService, MAX_AMOUNT};
