//! The cost-computation and time-windowing engines.
//!
//! Everything in here is pure, synchronous, read-only computation over
//! borrowed reading sets — no I/O, no shared state, no clock reads.

pub mod comparison;
pub mod cost;
pub mod daily;
pub mod window;
