mod side;

pub use side::Side;
