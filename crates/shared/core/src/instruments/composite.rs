use rust_decimal::Decimal;
use serde::Serialize;

use super::Contract;
use crate::chart::{PayoffChart, PnlPoint, PriceGrid};
use crate::error::PayoffResult;
use crate::values::{Pnl, Price};

/// An ordered group of option legs evaluated together
///
/// Legs keep insertion order. Order only matters for display and strike
/// markers; the PnL is the elementwise sum over all legs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompositeContract {
    contracts: Vec<Contract>,
}

impl CompositeContract {
    /// Create a composite from legs in the given order
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self { contracts }
    }

    /// Composite with no legs (flat zero PnL)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Strike of every leg, in leg order (duplicates kept)
    pub fn strikes(&self) -> Vec<Price> {
        self.contracts.iter().map(Contract::strike).collect()
    }

    /// Premium paid on long legs minus premium received on short legs
    pub fn net_premium(&self) -> Price {
        self.contracts.iter().fold(Decimal::ZERO, |total, contract| {
            total.saturating_sub(contract.side().apply(Decimal::ZERO, contract.premium()))
        })
    }

    /// New composite with `contract` in front of the existing legs
    pub(crate) fn prepended(self, contract: Contract) -> Self {
        let mut contracts = Vec::with_capacity(self.contracts.len() + 1);
        contracts.push(contract);
        contracts.extend(self.contracts);
        Self { contracts }
    }

    /// Summed PnL over all legs, same length and order as `prices`
    ///
    /// Sums saturate at the `Decimal` bounds.
    pub fn pnl(&self, prices: &[Price]) -> Vec<Pnl> {
        let mut total = vec![Decimal::ZERO; prices.len()];
        for contract in &self.contracts {
            for (acc, &price) in total.iter_mut().zip(prices) {
                *acc = acc.saturating_add(contract.pnl_at(price));
            }
        }
        total
    }

    /// Evaluate the payoff curve over `[price_min, price_max]`
    ///
    /// The range is validated before any sampling happens.
    pub fn chart(&self, price_min: Price, price_max: Price) -> PayoffResult<PayoffChart> {
        let grid = PriceGrid::new(price_min, price_max)?;
        let pnl = self.pnl(grid.points());

        let curve = grid
            .points()
            .iter()
            .zip(pnl)
            .map(|(&price, pnl)| PnlPoint { price, pnl })
            .collect();

        Ok(PayoffChart {
            curve,
            strikes: self.strikes(),
            price_min: grid.min(),
            price_max: grid.max(),
        })
    }
}

impl From<Vec<Contract>> for CompositeContract {
    fn from(contracts: Vec<Contract>) -> Self {
        Self::new(contracts)
    }
}

impl FromIterator<Contract> for CompositeContract {
    fn from_iter<I: IntoIterator<Item = Contract>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl std::fmt::Display for CompositeContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeContract([")?;
        for (i, contract) in self.contracts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", contract)?;
        }
        write!(f, "])")
    }
}
