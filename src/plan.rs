use crate::{prelude::*, quantity::rate::KilowattHourRate};

/// A named tariff with a single unit rate applied uniformly to
/// consumption.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PricePlan {
    pub name: String,

    pub unit_rate: KilowattHourRate,
}

/// The set of available price plans, loaded once at startup and
/// treated as read-only for the process lifetime.
///
/// Iteration order is the load order; ranking relies on it as the
/// tie-break for equally priced plans.
#[derive(Debug)]
pub struct PlanRegistry(Vec<PricePlan>);

impl PlanRegistry {
    pub fn try_new(plans: Vec<PricePlan>) -> Result<Self> {
        for (index, plan) in plans.iter().enumerate() {
            ensure!(
                plan.unit_rate > KilowattHourRate::ZERO,
                "price plan `{}` must have a positive unit rate",
                plan.name,
            );
            ensure!(
                plans[..index].iter().all(|other| other.name != plan.name),
                "duplicate price plan name `{}`",
                plan.name,
            );
        }
        Ok(Self(plans))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PricePlan> {
        self.0.iter().find(|plan| plan.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePlan> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_rejects_duplicate_names() {
        let result = PlanRegistry::try_new(vec![
            PricePlan { name: "standard".to_string(), unit_rate: dec!(1).into() },
            PricePlan { name: "standard".to_string(), unit_rate: dec!(2).into() },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let result = PlanRegistry::try_new(vec![PricePlan {
            name: "free-lunch".to_string(),
            unit_rate: dec!(0).into(),
        }]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup() -> Result {
        let registry = PlanRegistry::try_new(vec![PricePlan {
            name: "standard".to_string(),
            unit_rate: dec!(0.5).into(),
        }])?;
        assert!(registry.get("standard").is_some());
        assert!(registry.get("no-such-plan").is_none());
        Ok(())
    }
}
