use chrono::{DateTime, Local, NaiveDate};

use crate::{
    core::{
        comparison::{cost_per_plan, rank_of_plan},
        cost::calculate_cost,
        daily::{DayOfWeekCost, daily_costs, day_of_week_costs, summed_daily_cost},
        window::Window,
    },
    error::CostError,
    plan::{PlanRegistry, PricePlan},
    prelude::*,
    quantity::cost::Cost,
    reading::Reading,
    store::{AccountDirectory, ReadingStore},
};

/// The outward face of the cost engines, wired to the collaborators.
///
/// Everything is injected: the service holds read-only references and
/// never reaches for a clock — the reference instant always comes from
/// the caller.
#[derive(bon::Builder)]
pub struct CostService<'a> {
    readings: &'a ReadingStore,
    accounts: &'a AccountDirectory,
    plans: &'a PlanRegistry,
}

impl CostService<'_> {
    /// Cost of the trailing Sunday-to-Sunday week relative to the
    /// reference instant, under the meter's assigned plan.
    #[instrument(skip(self), fields(reference = %reference))]
    pub fn last_week_cost(
        &self,
        smart_meter_id: &str,
        reference: DateTime<Local>,
    ) -> Result<Cost, CostError> {
        let readings = self.readings.get(smart_meter_id).ok_or(CostError::ReadingsNotFound)?;
        let plan = self.assigned_plan(smart_meter_id)?;
        let window = Window::last_week_of(reference);
        debug!(?window, "computed the last-week window");
        let last_week_readings = window.filter(readings);
        if last_week_readings.is_empty() {
            return Err(CostError::ReadingsNotFound);
        }
        calculate_cost(&last_week_readings, plan)
    }

    /// Per-calendar-date costs over the meter's full history, in date
    /// order.
    #[instrument(skip(self))]
    pub fn daily_costs(
        &self,
        smart_meter_id: &str,
    ) -> Result<Vec<(NaiveDate, Cost)>, CostError> {
        let readings = self.non_empty_readings(smart_meter_id)?;
        let plan = self.assigned_plan(smart_meter_id)?;
        daily_costs(readings, plan)
    }

    /// Sum of the independently billed per-date costs over the meter's
    /// full history.
    #[instrument(skip(self))]
    pub fn summed_daily_cost(&self, smart_meter_id: &str) -> Result<Cost, CostError> {
        let readings = self.non_empty_readings(smart_meter_id)?;
        let plan = self.assigned_plan(smart_meter_id)?;
        summed_daily_cost(readings, plan)
    }

    /// Day-of-week costs over the meter's full history, Sunday first,
    /// each with the assigned plan's rank for that bucket.
    #[instrument(skip(self))]
    pub fn day_of_week_costs(
        &self,
        smart_meter_id: &str,
    ) -> Result<Vec<DayOfWeekCost>, CostError> {
        let readings = self.non_empty_readings(smart_meter_id)?;
        let plan = self.assigned_plan(smart_meter_id)?;
        day_of_week_costs(readings, plan, self.plans)
    }

    /// Cost of the meter's full history under every registered plan, in
    /// registry order. No plan assignment is required.
    #[instrument(skip(self))]
    pub fn cost_per_plan(&self, smart_meter_id: &str) -> Result<Vec<(&str, Cost)>, CostError> {
        let readings = self.non_empty_readings(smart_meter_id)?;
        cost_per_plan(readings, self.plans)
    }

    /// Rank of the meter's assigned plan against all registered plans.
    #[instrument(skip(self))]
    pub fn current_plan_rank(&self, smart_meter_id: &str) -> Result<Option<usize>, CostError> {
        let readings = self.non_empty_readings(smart_meter_id)?;
        let plan = self.assigned_plan(smart_meter_id)?;
        rank_of_plan(readings, &plan.name, self.plans)
    }

    /// The plan assignment check precedes any cost computation, so that
    /// «no account» surfaces distinctly from «no usage».
    fn assigned_plan(&self, smart_meter_id: &str) -> Result<&PricePlan, CostError> {
        self.accounts
            .plan_name(smart_meter_id)
            .and_then(|plan_name| self.plans.get(plan_name))
            .ok_or_else(|| CostError::PlanNotMatched { meter_id: smart_meter_id.to_string() })
    }

    fn non_empty_readings(&self, smart_meter_id: &str) -> Result<&[Reading], CostError> {
        match self.readings.get(smart_meter_id) {
            Some(readings) if !readings.is_empty() => Ok(readings),
            _ => Err(CostError::ReadingsNotFound),
        }
    }
}
