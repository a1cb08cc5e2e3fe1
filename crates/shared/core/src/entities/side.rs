use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PayoffError;
use crate::values::{Pnl, Price};

/// Side of an option leg - held (Long) or written (Short)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bought the option, paid the premium
    Long,
    /// Wrote the option, received the premium
    Short,
}

impl Side {
    /// Turn an intrinsic value into PnL net of premium.
    ///
    /// Shared by every option type: the buyer keeps the intrinsic value and
    /// paid the premium, the writer kept the premium and owes the intrinsic
    /// value. Results saturate at the `Decimal` bounds.
    pub fn apply(&self, intrinsic: Price, premium: Price) -> Pnl {
        match self {
            Side::Long => intrinsic.saturating_sub(premium),
            Side::Short => premium.saturating_sub(intrinsic),
        }
    }

    /// Short token used in display output ("L" / "S")
    pub fn token(&self) -> &'static str {
        match self {
            Side::Long => "L",
            Side::Short => "S",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Side {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "l" | "long" => Ok(Side::Long),
            "s" | "short" => Ok(Side::Short),
            _ => Err(PayoffError::InvalidArgument(format!(
                "unknown side '{}', expected L or S",
                s
            ))),
        }
    }
}
