use chrono::{DateTime, Local};

use crate::quantity::power::Kilowatts;

/// One instantaneous consumption-rate sample from a smart meter.
///
/// Readings are immutable once recorded. Duplicate timestamps are
/// allowed and never deduplicated.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    derive_more::Constructor,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Reading {
    pub time: DateTime<Local>,

    #[serde(rename = "reading")]
    pub value: Kilowatts,
}

impl Reading {
    pub const fn time(&self) -> DateTime<Local> {
        self.time
    }
}

/// The wire shape of one meter's submitted readings.
#[derive(serde::Deserialize, serde::Serialize)]
pub struct MeterReadings {
    #[serde(rename = "smartMeterId")]
    pub smart_meter_id: String,

    #[serde(rename = "electricityReadings")]
    pub electricity_readings: Vec<Reading>,
}
