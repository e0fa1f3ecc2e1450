use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use rust_decimal::Decimal;

use crate::quantity::{Quantity, energy::KilowattHours, time::Hours};

/// Instantaneous consumption rate, the value of a single meter reading.
pub type Kilowatts = Quantity<Decimal, 1, 0, 0>;

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kW", self.0)
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kW", self.0)
    }
}

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
