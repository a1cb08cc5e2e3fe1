use std::ops::Range;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Pnl, Price};

/// Horizontal axis label for payoff charts
pub const X_AXIS_LABEL: &str = "Underlying Price at Expiration";

/// Vertical axis label for payoff charts
pub const Y_AXIS_LABEL: &str = "PnL";

/// One sample of the payoff curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlPoint {
    pub price: Price,
    pub pnl: Pnl,
}

/// Everything a renderer needs to draw a payoff diagram
///
/// Renderers are expected to draw `curve`, shade `profit_regions` and
/// `loss_regions` differently, draw a horizontal line at zero PnL, draw a
/// vertical line at each entry of `strikes`, and label the axes with
/// `X_AXIS_LABEL` / `Y_AXIS_LABEL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffChart {
    /// Payoff samples in ascending price order
    pub curve: Vec<PnlPoint>,
    /// One strike per leg, in leg order
    pub strikes: Vec<Price>,
    pub price_min: Price,
    pub price_max: Price,
}

impl PayoffChart {
    /// Index ranges of `curve` where PnL is strictly positive
    pub fn profit_regions(&self) -> Vec<Range<usize>> {
        self.regions_where(|pnl| pnl > Decimal::ZERO)
    }

    /// Index ranges of `curve` where PnL is strictly negative
    pub fn loss_regions(&self) -> Vec<Range<usize>> {
        self.regions_where(|pnl| pnl < Decimal::ZERO)
    }

    fn regions_where(&self, predicate: impl Fn(Pnl) -> bool) -> Vec<Range<usize>> {
        let mut regions = Vec::new();
        let mut start = None;

        for (i, point) in self.curve.iter().enumerate() {
            match (predicate(point.pnl), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    regions.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            regions.push(s..self.curve.len());
        }

        regions
    }

    /// Highest sampled PnL
    pub fn max_pnl(&self) -> Option<Pnl> {
        self.curve.iter().map(|p| p.pnl).max()
    }

    /// Lowest sampled PnL
    pub fn min_pnl(&self) -> Option<Pnl> {
        self.curve.iter().map(|p| p.pnl).min()
    }

    /// Prices where the curve crosses zero PnL
    ///
    /// Exact zero samples are reported as-is; sign changes between two
    /// samples are linearly interpolated.
    pub fn breakevens(&self) -> Vec<Price> {
        let mut out = Vec::new();

        for (i, point) in self.curve.iter().enumerate() {
            if point.pnl.is_zero() {
                out.push(point.price);
                continue;
            }
            if let Some(next) = self.curve.get(i + 1) {
                let crosses = (point.pnl > Decimal::ZERO && next.pnl < Decimal::ZERO)
                    || (point.pnl < Decimal::ZERO && next.pnl > Decimal::ZERO);
                if crosses {
                    let fraction = point.pnl / point.pnl.saturating_sub(next.pnl);
                    let step = next.price.saturating_sub(point.price);
                    out.push(point.price.saturating_add(step.saturating_mul(fraction)));
                }
            }
        }

        out
    }
}
