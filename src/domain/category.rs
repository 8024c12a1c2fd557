//! Spending categories offered by the entry form.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::utils::capitalize_first;

/// Icon shown for categories outside the known set.
pub const FALLBACK_ICON: &str = "📌";

/// Closed set of categories plus a catch-all for values the form did not
/// offer. Unknown names are preserved rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Shopping,
    Health,
    Other,
    #[serde(untagged)]
    Unrecognized(String),
}

impl Category {
    pub const KNOWN: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    /// Parses a raw selector value; never fails.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "entertainment" => Category::Entertainment,
            "utilities" => Category::Utilities,
            "shopping" => Category::Shopping,
            "health" => Category::Health,
            "other" => Category::Other,
            _ => Category::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Shopping => "shopping",
            Category::Health => "health",
            Category::Other => "other",
            Category::Unrecognized(name) => name,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transport => "🚗",
            Category::Entertainment => "🎮",
            Category::Utilities => "⚡",
            Category::Shopping => "🛍️",
            Category::Health => "💊",
            Category::Other | Category::Unrecognized(_) => FALLBACK_ICON,
        }
    }

    /// Name with its first letter capitalized, e.g. `Food`.
    pub fn label(&self) -> String {
        match self {
            Category::Unrecognized(name) if name.is_empty() => "Other".to_string(),
            _ => capitalize_first(self.as_str()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_raw(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
