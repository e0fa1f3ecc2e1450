use crate::{
    core::cost::calculate_cost,
    error::CostError,
    plan::PlanRegistry,
    quantity::cost::Cost,
    reading::Reading,
};

/// Cost of the same reading set under every registered plan, in
/// registry order.
///
/// A degenerate reading set fails once for all plans, since the input
/// is shared.
pub fn cost_per_plan<'a>(
    readings: &[Reading],
    registry: &'a PlanRegistry,
) -> Result<Vec<(&'a str, Cost)>, CostError> {
    registry
        .iter()
        .map(|plan| Ok((plan.name.as_str(), calculate_cost(readings, plan)?)))
        .collect()
}

/// Zero-based rank of the named plan among all plans, ascending by cost.
///
/// Ties keep registry order (the sort is stable), so of two equally
/// priced plans the one registered first ranks better. Returns `None`
/// when the plan is not registered.
pub fn rank_of_plan(
    readings: &[Reading],
    plan_name: &str,
    registry: &PlanRegistry,
) -> Result<Option<usize>, CostError> {
    if registry.get(plan_name).is_none() {
        return Ok(None);
    }
    let mut costs = cost_per_plan(readings, registry)?;
    costs.sort_by_key(|(_, cost)| *cost);
    Ok(costs.iter().position(|(name, _)| *name == plan_name))
}
