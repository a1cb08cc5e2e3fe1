//! opdiag Core Domain
//!
//! Pure payoff model for option positions held to expiration.
//! This crate contains no I/O and is 100% unit testable.
//!
//! ```ignore
//! use opdiag_core::{Contract, Side};
//! use rust_decimal_macros::dec;
//!
//! let call = Contract::call(dec!(100), dec!(5), Side::Long)?;
//! let put = Contract::put(dec!(100), dec!(5), Side::Long)?;
//! let straddle = call + put;
//!
//! let chart = straddle.chart(dec!(0), dec!(200))?;
//! assert_eq!(chart.curve.len(), 201);
//! ```

pub mod chart;
pub mod entities;
pub mod error;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use chart::{
    DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, PayoffChart, PnlPoint, PriceGrid, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
pub use entities::Side;
pub use error::{PayoffError, PayoffResult};
pub use instruments::{CompositeContract, Contract, MAX_REPLICATION, OptionType, Position};
pub use values::{Pnl, Price};
