use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::error::{PayoffError, PayoffResult};
use crate::values::Price;

/// Lower bound of the default chart range
pub const DEFAULT_PRICE_MIN: Price = dec!(0);

/// Upper bound of the default chart range
pub const DEFAULT_PRICE_MAX: Price = dec!(200);

/// Upper limit on the number of sampled prices
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Evenly spaced underlying prices over `[min, max]`
///
/// Holds `floor(max - min) + 1` points including both endpoints, so the
/// default range 0..200 samples every integer price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceGrid {
    min: Price,
    max: Price,
    points: Vec<Price>,
}

impl PriceGrid {
    pub fn new(min: Price, max: Price) -> PayoffResult<Self> {
        if min >= max {
            return Err(PayoffError::InvalidArgument(format!(
                "price range must satisfy min < max, got [{}, {}]",
                min, max
            )));
        }

        let count = max
            .checked_sub(min)
            .and_then(|span| span.floor().to_usize())
            .and_then(|steps| steps.checked_add(1))
            .filter(|&count| count <= MAX_GRID_POINTS)
            .ok_or_else(|| {
                PayoffError::InvalidArgument(format!(
                    "price range [{}, {}] is too wide, at most {} samples allowed",
                    min, max, MAX_GRID_POINTS
                ))
            })?;

        Ok(Self {
            min,
            max,
            points: Self::linspace(min, max, count),
        })
    }

    fn linspace(min: Price, max: Price, count: usize) -> Vec<Price> {
        if count == 1 {
            return vec![min];
        }

        let last = count - 1;
        let step = (max - min) / Decimal::from(last);
        (0..count)
            .map(|i| {
                // Pin the endpoint so rounding in `step` never drifts past max
                if i == last {
                    max
                } else {
                    (min + step * Decimal::from(i)).normalize()
                }
            })
            .collect()
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Price {
        self.max
    }

    pub fn points(&self) -> &[Price] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_has_201_integer_points() {
        let grid = PriceGrid::new(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX).unwrap();

        assert_eq!(grid.points().len(), 201);
        for (i, point) in grid.points().iter().enumerate() {
            assert_eq!(*point, Decimal::from(i));
        }
    }

    #[test]
    fn test_offset_range() {
        let grid = PriceGrid::new(dec!(50), dec!(60)).unwrap();
        assert_eq!(grid.points().len(), 11);
        assert_eq!(grid.points()[0], dec!(50));
        assert_eq!(grid.points()[5], dec!(55));
        assert_eq!(grid.points()[10], dec!(60));
    }

    #[test]
    fn test_fractional_span_is_evenly_spaced() {
        // floor(2.5) + 1 = 3 points: 0, 1.25, 2.5
        let grid = PriceGrid::new(dec!(0), dec!(2.5)).unwrap();
        assert_eq!(grid.points(), &[dec!(0), dec!(1.25), dec!(2.5)]);
    }

    #[test]
    fn test_span_below_one_gives_single_point() {
        let grid = PriceGrid::new(dec!(10), dec!(10.5)).unwrap();
        assert_eq!(grid.points(), &[dec!(10)]);
    }

    #[test]
    fn test_non_integer_step_ends_exactly_at_max() {
        let grid = PriceGrid::new(dec!(0), dec!(1.5)).unwrap();
        assert_eq!(grid.points(), &[dec!(0), dec!(1.5)]);

        let grid = PriceGrid::new(dec!(0), dec!(3.3)).unwrap();
        assert_eq!(grid.points().len(), 4);
        assert_eq!(grid.points()[3], dec!(3.3));
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        assert!(matches!(
            PriceGrid::new(dec!(200), dec!(0)),
            Err(PayoffError::InvalidArgument(_))
        ));
        assert!(matches!(
            PriceGrid::new(dec!(100), dec!(100)),
            Err(PayoffError::InvalidArgument(_))
        ));
        assert!(matches!(
            PriceGrid::new(dec!(0), dec!(10_000_000)),
            Err(PayoffError::InvalidArgument(_))
        ));
        // Span does not fit in a Decimal
        assert!(matches!(
            PriceGrid::new(Decimal::MIN, Decimal::MAX),
            Err(PayoffError::InvalidArgument(_))
        ));
    }
}
