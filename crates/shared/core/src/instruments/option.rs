use std::num::NonZeroUsize;
use std::ops::{Add, Mul};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CompositeContract, Position};
use crate::entities::Side;
use crate::error::{PayoffError, PayoffResult};
use crate::values::{Pnl, Price};

/// Upper limit on the number of copies `Contract::replicate` produces
pub const MAX_REPLICATION: usize = 1_000;

/// Option type: Call (right to buy) or Put (right to sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff of exercising at `price`, ignoring premium
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn intrinsic_value(&self, strike: Price, price: Price) -> Price {
        match self {
            OptionType::Call => price.saturating_sub(strike).max(Decimal::ZERO),
            OptionType::Put => strike.saturating_sub(price).max(Decimal::ZERO),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(PayoffError::InvalidArgument(format!(
                "unknown option type '{}', expected call or put",
                s
            ))),
        }
    }
}

/// A single option leg held to expiration (e.g., Call(strike=100, premium=5, side='L'))
///
/// Fields are private: a `Contract` can only be obtained through the
/// validating constructors, so every value in circulation satisfies
/// strike > 0 and premium >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Contract {
    option_type: OptionType,
    strike: Price,
    premium: Price,
    side: Side,
}

impl Contract {
    /// Create a new option contract
    pub fn new(
        option_type: OptionType,
        strike: Price,
        premium: Price,
        side: Side,
    ) -> PayoffResult<Self> {
        if strike <= Decimal::ZERO {
            return Err(PayoffError::InvalidArgument(format!(
                "strike must be positive, got {}",
                strike
            )));
        }
        if premium < Decimal::ZERO {
            return Err(PayoffError::InvalidArgument(format!(
                "premium must be non-negative, got {}",
                premium
            )));
        }

        Ok(Self {
            option_type,
            strike,
            premium,
            side,
        })
    }

    pub fn call(strike: Price, premium: Price, side: Side) -> PayoffResult<Self> {
        Self::new(OptionType::Call, strike, premium, side)
    }

    pub fn put(strike: Price, premium: Price, side: Side) -> PayoffResult<Self> {
        Self::new(OptionType::Put, strike, premium, side)
    }

    /// Create from raw tokens, e.g. `("call", 100, 5, "L")`
    pub fn from_tokens(kind: &str, strike: Price, premium: Price, side: &str) -> PayoffResult<Self> {
        Self::new(kind.parse()?, strike, premium, side.parse()?)
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn strike(&self) -> Price {
        self.strike
    }

    pub fn premium(&self) -> Price {
        self.premium
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Calculate intrinsic value
    pub fn intrinsic_value(&self, price: Price) -> Price {
        self.option_type.intrinsic_value(self.strike, price)
    }

    /// PnL at a single underlying price at expiration
    pub fn pnl_at(&self, price: Price) -> Pnl {
        self.side.apply(self.intrinsic_value(price), self.premium)
    }

    /// PnL for every price, same length and order as `prices`
    pub fn pnl(&self, prices: &[Price]) -> Vec<Pnl> {
        prices.iter().map(|&price| self.pnl_at(price)).collect()
    }

    /// Combine with another contract or a composite.
    ///
    /// A contract yields a two-leg composite; a composite yields a new
    /// composite with this contract in front of its legs.
    pub fn combine(self, rhs: impl Into<Position>) -> CompositeContract {
        match rhs.into() {
            Position::Single(other) => CompositeContract::new(vec![self, other]),
            Position::Composite(composite) => composite.prepended(self),
        }
    }

    /// `count` copies of this contract in one composite
    ///
    /// `count` must be in `1..=MAX_REPLICATION`.
    pub fn replicate(self, count: usize) -> PayoffResult<CompositeContract> {
        let count = NonZeroUsize::new(count)
            .filter(|count| count.get() <= MAX_REPLICATION)
            .ok_or_else(|| {
                PayoffError::InvalidArgument(format!(
                    "replication count must be between 1 and {}, got {}",
                    MAX_REPLICATION, count
                ))
            })?;
        Ok(self * count)
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(strike={}, premium={}, side='{}')",
            self.option_type, self.strike, self.premium, self.side
        )
    }
}

impl Add for Contract {
    type Output = CompositeContract;

    fn add(self, rhs: Contract) -> CompositeContract {
        self.combine(rhs)
    }
}

impl Add<CompositeContract> for Contract {
    type Output = CompositeContract;

    fn add(self, rhs: CompositeContract) -> CompositeContract {
        self.combine(rhs)
    }
}

impl Add<&CompositeContract> for Contract {
    type Output = CompositeContract;

    fn add(self, rhs: &CompositeContract) -> CompositeContract {
        self.combine(rhs.clone())
    }
}

impl Mul<NonZeroUsize> for Contract {
    type Output = CompositeContract;

    fn mul(self, count: NonZeroUsize) -> CompositeContract {
        CompositeContract::new(vec![self; count.get()])
    }
}
