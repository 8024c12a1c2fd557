use std::fmt;

use serde::{Deserialize, Serialize};

/// Session-unique identifier assigned to each transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl TransactionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(TransactionId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_with_optional_hash_prefix() {
        assert_eq!("42".parse::<TransactionId>().unwrap(), TransactionId(42));
        assert_eq!(" #7 ".parse::<TransactionId>().unwrap(), TransactionId(7));
        assert!("abc".parse::<TransactionId>().is_err());
    }
}
