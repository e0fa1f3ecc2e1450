use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use itertools::Itertools;

use crate::{
    core::{comparison::rank_of_plan, cost::calculate_cost},
    error::CostError,
    plan::{PlanRegistry, PricePlan},
    quantity::cost::Cost,
    reading::Reading,
};

/// Cost of one day-of-week bucket, with the readings that produced it.
#[derive(Clone, Debug)]
pub struct DayOfWeekCost {
    pub day_of_week: Weekday,
    pub cost: Cost,
    pub plan_rank: Option<usize>,
    pub readings: Vec<Reading>,
}

/// Group the full reading history by local calendar date.
#[must_use]
pub fn bucket_by_calendar_day(readings: &[Reading]) -> BTreeMap<NaiveDate, Vec<Reading>> {
    let mut buckets = BTreeMap::<_, Vec<_>>::new();
    for reading in readings {
        buckets.entry(reading.time.date_naive()).or_default().push(*reading);
    }
    buckets
}

/// Per-date costs over the full history, in date order.
pub fn daily_costs(
    readings: &[Reading],
    plan: &PricePlan,
) -> Result<Vec<(NaiveDate, Cost)>, CostError> {
    bucket_by_calendar_day(readings)
        .into_iter()
        .map(|(date, day_readings)| Ok((date, calculate_cost(&day_readings, plan)?)))
        .collect()
}

/// Sum of independently averaged single-day costs.
///
/// Each calendar date is billed on its own and the results are added
/// up. This is not the same number as one [`calculate_cost`] across the
/// whole span: the flat-rate averaging there is applied once over the
/// full range, here once per day.
pub fn summed_daily_cost(readings: &[Reading], plan: &PricePlan) -> Result<Cost, CostError> {
    daily_costs(readings, plan)?
        .into_iter()
        .try_fold(Cost::ZERO, |total, (_, cost)| Ok(total + cost))
}

/// Group the full reading history by day-of-week label, Sunday first.
///
/// Readings of all calendar weeks sharing a label are concatenated into
/// one bucket, preserving input order within the bucket.
#[must_use]
pub fn bucket_by_day_of_week(readings: &[Reading]) -> Vec<(Weekday, Vec<Reading>)> {
    readings
        .iter()
        .copied()
        .into_group_map_by(|reading| reading.time.weekday())
        .into_iter()
        .sorted_by_key(|(weekday, _)| weekday.num_days_from_sunday())
        .collect()
}

/// Cost and plan rank per observed day-of-week label.
pub fn day_of_week_costs(
    readings: &[Reading],
    plan: &PricePlan,
    registry: &PlanRegistry,
) -> Result<Vec<DayOfWeekCost>, CostError> {
    bucket_by_day_of_week(readings)
        .into_iter()
        .map(|(day_of_week, bucket)| {
            Ok(DayOfWeekCost {
                day_of_week,
                cost: calculate_cost(&bucket, plan)?,
                plan_rank: rank_of_plan(&bucket, &plan.name, registry)?,
                readings: bucket,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Local, TimeZone, Weekday};
    use rust_decimal::dec;

    use super::*;

    fn at(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 7, day, hour, 0, 0).unwrap()
    }

    fn plan() -> PricePlan {
        PricePlan { name: "standard".to_string(), unit_rate: dec!(1.0).into() }
    }

    #[test]
    fn test_bucket_by_calendar_day() {
        let readings = vec![
            Reading::new(at(10, 22), dec!(0.4).into()),
            Reading::new(at(11, 8), dec!(0.6).into()),
            Reading::new(at(10, 9), dec!(0.2).into()),
        ];
        let buckets = bucket_by_calendar_day(&readings);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&at(10, 0).date_naive()].len(), 2);
        assert_eq!(buckets[&at(11, 0).date_naive()].len(), 1);
    }

    #[test]
    fn test_summed_daily_cost_differs_from_whole_span() {
        // Two days, 0.5 kW average over 2 hours each: 1 kWh per day.
        let readings = vec![
            Reading::new(at(10, 9), dec!(0.2).into()),
            Reading::new(at(10, 11), dec!(0.8).into()),
            Reading::new(at(11, 9), dec!(0.2).into()),
            Reading::new(at(11, 11), dec!(0.8).into()),
        ];
        let plan = plan();
        let summed = summed_daily_cost(&readings, &plan).unwrap();
        assert_eq!(summed, Cost::from(dec!(2.0)));
        // One flat average over the whole 26-hour span bills differently.
        let whole_span = calculate_cost(&readings, &plan).unwrap();
        assert_eq!(whole_span, Cost::from(dec!(13.0)));
        assert_ne!(summed, whole_span);
    }

    #[test]
    fn test_day_of_week_buckets_are_sunday_first() {
        // 2024-07-14 is a Sunday, 2024-07-13 a Saturday, 2024-07-09 a Tuesday.
        let readings = vec![
            Reading::new(at(13, 10), dec!(0.5).into()),
            Reading::new(at(9, 10), dec!(0.5).into()),
            Reading::new(at(14, 10), dec!(0.5).into()),
        ];
        let labels: Vec<Weekday> =
            bucket_by_day_of_week(&readings).into_iter().map(|(weekday, _)| weekday).collect();
        assert_eq!(labels, vec![Weekday::Sun, Weekday::Tue, Weekday::Sat]);
    }

    #[test]
    fn test_day_of_week_concatenates_across_weeks() {
        // Two Wednesdays, one week apart; both land in the same bucket.
        let readings = vec![
            Reading::new(at(10, 9), dec!(0.2).into()),
            Reading::new(at(17, 9), dec!(0.8).into()),
        ];
        let buckets = bucket_by_day_of_week(&readings);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].0, Weekday::Wed);
        assert_eq!(buckets[0].1.len(), 2);
    }

    #[test]
    fn test_day_of_week_costs() {
        let registry = PlanRegistry::try_new(vec![
            plan(),
            PricePlan { name: "premium".to_string(), unit_rate: dec!(5.0).into() },
        ])
        .unwrap();
        let readings = vec![
            Reading::new(at(10, 9), dec!(0.2).into()),
            Reading::new(at(10, 11), dec!(0.8).into()),
        ];
        let costs = day_of_week_costs(&readings, &plan(), &registry).unwrap();
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0].day_of_week, Weekday::Wed);
        assert_eq!(costs[0].cost, Cost::from(dec!(1.0)));
        assert_eq!(costs[0].plan_rank, Some(0));
        assert_eq!(costs[0].readings.len(), 2);
    }

    #[test]
    fn test_single_reading_day_is_invalid() {
        let readings = vec![Reading::new(at(10, 9), dec!(0.2).into())];
        assert_eq!(summed_daily_cost(&readings, &plan()), Err(CostError::InvalidReading));
    }
}
