use std::fmt::{Debug, Formatter};

use chrono::TimeDelta;
use rust_decimal::{Decimal, dec};

use crate::quantity::Quantity;

pub type Hours = Quantity<Decimal, 0, 1, 0>;

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.0)
    }
}

impl Hours {
    /// Convert a duration to hours, counting whole seconds.
    ///
    /// Sub-second precision is deliberately dropped: readings carry
    /// second-precision timestamps and the billing maths counts whole
    /// elapsed seconds.
    #[must_use]
    pub fn from_delta(delta: TimeDelta) -> Self {
        Self(Decimal::from(delta.num_seconds()) / dec!(3600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_delta() {
        assert_eq!(Hours::from_delta(TimeDelta::hours(2)), Hours::from(Decimal::TWO));
        assert_eq!(Hours::from_delta(TimeDelta::minutes(90)), Hours::from(dec!(1.5)));
    }

    #[test]
    fn test_from_delta_truncates_sub_second() {
        assert_eq!(Hours::from_delta(TimeDelta::milliseconds(3_600_999)), Hours::from(Decimal::ONE));
    }
}
