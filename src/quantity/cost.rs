use std::fmt::{Debug, Display, Formatter};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::quantity::Quantity;

pub type Cost = Quantity<Decimal, 0, 0, 1>;

impl Cost {
    /// Round to one fractional digit, midpoints away from zero.
    ///
    /// This is the final rounding step of every cost figure; all the
    /// intermediate arithmetic stays unrounded.
    #[must_use]
    pub fn round_half_up(self) -> Self {
        Self(self.0.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} €", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}€", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(Cost::from(dec!(0.24)).round_half_up(), Cost::from(dec!(0.2)));
        assert_eq!(Cost::from(dec!(0.25)).round_half_up(), Cost::from(dec!(0.3)));
        assert_eq!(Cost::from(dec!(0.15)).round_half_up(), Cost::from(dec!(0.2)));
    }

    #[test]
    fn test_round_half_up_is_idempotent() {
        let rounded = Cost::from(dec!(12.3456)).round_half_up();
        assert_eq!(rounded.round_half_up(), rounded);
        assert_eq!(rounded, Cost::from(dec!(12.3)));
    }
}
