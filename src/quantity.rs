pub mod cost;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;

use std::ops::{Div, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dimensioned numeric newtype.
///
/// The const parameters are the exponents of power, time, and currency:
/// energy is `POWER = 1, TIME = 1`, a kilowatt-hour tariff is
/// `POWER = -1, TIME = -1, COST = 1`, and so on. Products that cross
/// dimensions are implemented manually on the aliases.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<T, const POWER: isize, const TIME: isize, const COST: isize>(pub T);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<Decimal, POWER, TIME, COST> {
    pub const ZERO: Self = Self(Decimal::ZERO);
}

impl<T, const POWER: isize, const TIME: isize, const COST: isize> Mul<T>
    for Quantity<T, POWER, TIME, COST>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, COST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const POWER: isize, const TIME: isize, const COST: isize> Div<T>
    for Quantity<T, POWER, TIME, COST>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, COST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}
