use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
/// Covers underlying prices, strikes and premiums.
pub type Price = Decimal;

/// Profit/loss value at expiration, net of premium
pub type Pnl = Decimal;
