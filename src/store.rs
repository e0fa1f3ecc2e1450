use std::collections::HashMap;

use crate::reading::{MeterReadings, Reading};

/// Per-meter append-only reading history.
///
/// The store only holds data; every computation happens in [`crate::core`]
/// over a borrowed slice, which the borrow checker keeps stable for the
/// duration of the call.
#[derive(Default)]
pub struct ReadingStore(HashMap<String, Vec<Reading>>);

impl ReadingStore {
    #[must_use]
    pub fn get(&self, smart_meter_id: &str) -> Option<&[Reading]> {
        self.0.get(smart_meter_id).map(Vec::as_slice)
    }

    pub fn store(&mut self, smart_meter_id: &str, readings: impl IntoIterator<Item = Reading>) {
        self.0.entry(smart_meter_id.to_string()).or_default().extend(readings);
    }
}

impl FromIterator<MeterReadings> for ReadingStore {
    fn from_iter<T: IntoIterator<Item = MeterReadings>>(iterator: T) -> Self {
        let mut this = Self::default();
        for batch in iterator {
            this.store(&batch.smart_meter_id, batch.electricity_readings);
        }
        this
    }
}

/// Maps a smart meter to its assigned price plan, if any.
#[derive(Default, derive_more::From)]
pub struct AccountDirectory(HashMap<String, String>);

impl AccountDirectory {
    #[must_use]
    pub fn plan_name(&self, smart_meter_id: &str) -> Option<&str> {
        self.0.get(smart_meter_id).map(String::as_str)
    }
}
