//! Option positions held to expiration
//!
//! - `Contract`: a single call or put leg
//! - `CompositeContract`: an ordered group of legs (spreads, straddles, ...)
//! - `Position`: either of the above, for operands only known at runtime

mod composite;
mod option;
mod position;

pub use composite::CompositeContract;
pub use option::{Contract, MAX_REPLICATION, OptionType};
pub use position::Position;
