use super::{CompositeContract, Contract};
use crate::error::{PayoffError, PayoffResult};

/// Either a single leg or a group of legs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Single(Contract),
    Composite(CompositeContract),
}

impl Position {
    /// Combine two positions into a composite.
    ///
    /// Composition always starts from a single contract. A composite on the
    /// left is rejected with `TypeMismatch`: merging two composites is not
    /// supported.
    pub fn combine(self, rhs: impl Into<Position>) -> PayoffResult<CompositeContract> {
        let rhs = rhs.into();
        match self {
            Position::Single(contract) => Ok(contract.combine(rhs)),
            Position::Composite(_) => Err(PayoffError::TypeMismatch(format!(
                "cannot combine CompositeContract with {}: composition must start from a contract",
                rhs.kind_name()
            ))),
        }
    }

    /// View as a composite (a single leg becomes a one-leg composite)
    pub fn into_composite(self) -> CompositeContract {
        match self {
            Position::Single(contract) => CompositeContract::new(vec![contract]),
            Position::Composite(composite) => composite,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Position::Single(_) => "Contract",
            Position::Composite(_) => "CompositeContract",
        }
    }
}

impl From<Contract> for Position {
    fn from(contract: Contract) -> Self {
        Position::Single(contract)
    }
}

impl From<CompositeContract> for Position {
    fn from(composite: CompositeContract) -> Self {
        Position::Composite(composite)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Single(contract) => write!(f, "{}", contract),
            Position::Composite(composite) => write!(f, "{}", composite),
        }
    }
}
