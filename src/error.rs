/// Recoverable failures of the cost engines.
///
/// None of these is fatal to the process: the adapter maps them onto
/// "no data" or "bad input" responses. The engines never retry — they
/// are pure functions of their inputs, so a retry without new data
/// cannot change the outcome.
#[derive(Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum CostError {
    /// No readings exist for the meter, or the requested window
    /// contains none.
    #[display("no readings found")]
    ReadingsNotFound,

    /// The meter has no usable price plan assigned.
    #[display("smart meter `{meter_id}` is not matched to a price plan")]
    PlanNotMatched { meter_id: String },

    /// A single reading cannot establish elapsed time.
    #[display("a reading set of one cannot be billed")]
    InvalidReading,
}
