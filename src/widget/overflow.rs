use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What happens to item text wider than the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Cut at the right edge
    #[default]
    Truncate,
    /// Continue on the following rows
    Wrap,
}

impl FromStr for Overflow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" | "hidden" => Ok(Overflow::Truncate),
            "wrap" => Ok(Overflow::Wrap),
            other => Err(format!("unknown overflow mode `{}` (expected truncate or wrap)", other)),
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overflow::Truncate => f.write_str("truncate"),
            Overflow::Wrap => f.write_str("wrap"),
        }
    }
}
