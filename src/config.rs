use std::{collections::HashMap, path::Path};

use crate::{
    plan::{PlanRegistry, PricePlan},
    prelude::*,
    reading::MeterReadings,
    store::{AccountDirectory, ReadingStore},
};

/// The startup configuration: available price plans and meter-to-plan
/// account assignments.
///
/// ```toml
/// [[plans]]
/// name = "standard"
/// unit_rate = 1.0
///
/// [accounts]
/// "smart-meter-0" = "standard"
/// ```
#[derive(serde::Deserialize)]
pub struct Config {
    pub plans: Vec<PricePlan>,

    #[serde(default)]
    pub accounts: HashMap<String, String>,
}

impl Config {
    #[instrument(fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn try_into_registry(self) -> Result<(PlanRegistry, AccountDirectory)> {
        let registry = PlanRegistry::try_new(self.plans)?;
        for plan_name in self.accounts.values() {
            ensure!(
                registry.get(plan_name).is_some(),
                "account assignment refers to unknown price plan `{plan_name}`",
            );
        }
        Ok((registry, AccountDirectory::from(self.accounts)))
    }
}

/// Read meter histories from a JSON document: an array of the wire
/// shape, one element per meter.
#[instrument(fields(path = %path.display()))]
pub fn read_readings(path: &Path) -> Result<ReadingStore> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let batches: Vec<MeterReadings> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;
    Ok(batches.into_iter().collect())
}
