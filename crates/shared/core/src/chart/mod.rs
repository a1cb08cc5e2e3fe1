//! Price sampling and the payoff series handed to renderers

mod grid;
mod series;

pub use grid::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, MAX_GRID_POINTS, PriceGrid};
pub use series::{PayoffChart, PnlPoint, X_AXIS_LABEL, Y_AXIS_LABEL};
