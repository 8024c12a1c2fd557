use std::time::Duration;

use serde::Serialize;

/// How long views keep a notice on screen unless configured otherwise.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

pub const ADDED_MESSAGE: &str = "Transaction added successfully!";
pub const DELETED_MESSAGE: &str = "Transaction deleted";
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid description and amount";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// Transient message for the view; dismissal is up to the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    #[serde(rename = "display_for_ms", serialize_with = "as_millis")]
    pub display_for: Duration,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>, display_for: Duration) -> Self {
        Self {
            severity,
            message: message.into(),
            display_for,
        }
    }

    pub fn success(message: impl Into<String>, display_for: Duration) -> Self {
        Self::new(Severity::Success, message, display_for)
    }

    pub fn error(message: impl Into<String>, display_for: Duration) -> Self {
        Self::new(Severity::Error, message, display_for)
    }

    pub fn info(message: impl Into<String>, display_for: Duration) -> Self {
        Self::new(Severity::Info, message, display_for)
    }
}

fn as_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    serializer.serialize_u64(millis)
}
