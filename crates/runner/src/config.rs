//! Strategy configuration loading
//!
//! A strategy file is a JSON document listing the option legs to combine and
//! the price range to chart:
//!
//! ```json
//! {
//!   "name": "Long straddle",
//!   "price_min": 50,
//!   "price_max": 150,
//!   "legs": [
//!     { "kind": "call", "strike": 100, "premium": 5, "side": "L" },
//!     { "kind": "put",  "strike": 100, "premium": 5, "side": "L" }
//!   ]
//! }
//! ```

use std::path::Path;

use opdiag_core::{
    CompositeContract, Contract, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, PayoffError, Position,
    Price,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or assembling a strategy
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid leg #{index}: {source}")]
    InvalidLeg {
        index: usize,
        #[source]
        source: PayoffError,
    },

    #[error("Payoff error: {0}")]
    Payoff(#[from] PayoffError),

    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Root configuration for one payoff diagram
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Strategy name, used in log output
    #[serde(default = "default_strategy_name")]
    pub name: String,

    /// Lower bound of the charted price range
    #[serde(default = "default_price_min")]
    pub price_min: Price,

    /// Upper bound of the charted price range
    #[serde(default = "default_price_max")]
    pub price_max: Price,

    /// Legs in display order
    #[serde(default)]
    pub legs: Vec<LegConfig>,
}

fn default_strategy_name() -> String {
    "Unnamed strategy".to_string()
}

fn default_price_min() -> Price {
    DEFAULT_PRICE_MIN
}

fn default_price_max() -> Price {
    DEFAULT_PRICE_MAX
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            name: default_strategy_name(),
            price_min: default_price_min(),
            price_max: default_price_max(),
            legs: Vec::new(),
        }
    }
}

/// One option leg as written in a strategy file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegConfig {
    /// "call" or "put"
    pub kind: String,
    pub strike: Price,
    #[serde(default)]
    pub premium: Price,
    /// "L" (long) or "S" (short)
    pub side: String,
    /// Number of identical contracts
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

impl LegConfig {
    pub fn new(kind: &str, strike: Price, premium: Price, side: &str) -> Self {
        Self {
            kind: kind.to_string(),
            strike,
            premium,
            side: side.to_string(),
            quantity: default_quantity(),
        }
    }

    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Validate the leg and build its contract
    pub fn to_contract(&self) -> Result<Contract, PayoffError> {
        Contract::from_tokens(&self.kind, self.strike, self.premium, &self.side)
    }
}

impl StrategyConfig {
    /// Create an empty strategy with the default price range
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_leg(mut self, leg: LegConfig) -> Self {
        self.legs.push(leg);
        self
    }

    pub fn with_range(mut self, price_min: Price, price_max: Price) -> Self {
        self.price_min = price_min;
        self.price_max = price_max;
        self
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Total number of contracts across all legs (saturating)
    pub fn contract_count(&self) -> usize {
        self.legs
            .iter()
            .fold(0usize, |count, leg| count.saturating_add(leg.quantity))
    }

    /// Net premium: paid for long legs minus received for short legs
    pub fn net_premium(&self) -> Result<Decimal, ConfigError> {
        Ok(self.build()?.net_premium())
    }

    /// Validate every leg and assemble the composite position
    ///
    /// Legs keep file order; a leg with `quantity: n` contributes `n`
    /// consecutive copies of its contract. Quantities above
    /// `MAX_REPLICATION` are rejected before anything is allocated.
    pub fn build(&self) -> Result<CompositeContract, ConfigError> {
        let mut contracts = Vec::new();
        for (index, leg) in self.legs.iter().enumerate() {
            let contract = leg
                .to_contract()
                .map_err(|source| ConfigError::InvalidLeg { index, source })?;
            let block = contract
                .replicate(leg.quantity)
                .map_err(|source| ConfigError::InvalidLeg { index, source })?;
            contracts.extend_from_slice(block.contracts());
        }

        // Composition prepends, so fold from the last contract backwards
        let mut remaining = contracts.into_iter().rev();
        let Some(last) = remaining.next() else {
            return Ok(CompositeContract::empty());
        };
        let mut position = Position::from(last);
        for contract in remaining {
            position = Position::from(contract).combine(position)?.into();
        }

        Ok(position.into_composite())
    }
}
