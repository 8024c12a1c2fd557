use crate::domain::TransactionId;

/// Hands out transaction ids that look like millisecond timestamps but never
/// repeat, even when several ids are requested within one clock tick or the
/// clock steps backwards.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: Option<u64>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `max(now_millis, last + 1)`.
    pub fn next_id(&mut self, now_millis: u64) -> TransactionId {
        let candidate = match self.last {
            Some(last) => now_millis.max(last.saturating_add(1)),
            None => now_millis,
        };
        self.last = Some(candidate);
        TransactionId(candidate)
    }

    pub fn last_issued(&self) -> Option<TransactionId> {
        self.last.map(TransactionId)
    }
}
