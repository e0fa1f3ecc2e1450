use itertools::{Itertools, MinMaxResult};
use rust_decimal::Decimal;

use crate::{
    error::CostError,
    plan::PricePlan,
    quantity::{cost::Cost, power::Kilowatts, time::Hours},
    reading::Reading,
};

/// Convert a reading set into a monetary cost under the given plan.
///
/// The reading set is treated as a single flat-rate approximation over
/// its full span: the average of all sampled rates is billed across the
/// elapsed time between the earliest and the latest timestamp. The model
/// is intentionally insensitive to how the timestamps are distributed
/// in between.
pub fn calculate_cost(readings: &[Reading], plan: &PricePlan) -> Result<Cost, CostError> {
    // Earliest and latest by timestamp, not by position.
    let (earliest, latest) = match readings.iter().map(Reading::time).minmax() {
        MinMaxResult::NoElements => return Err(CostError::ReadingsNotFound),
        MinMaxResult::OneElement(_) => return Err(CostError::InvalidReading),
        MinMaxResult::MinMax(earliest, latest) => (earliest, latest),
    };
    let average = readings.iter().map(|reading| reading.value).sum::<Kilowatts>()
        / Decimal::from(readings.len());
    let consumed = average * Hours::from_delta(latest - earliest);
    Ok((consumed * plan.unit_rate).round_half_up())
}
