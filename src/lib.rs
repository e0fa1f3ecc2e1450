//! Smart-meter energy cost reporting.
//!
//! The crate computes, for a stream of timestamped meter readings and a
//! customer's price plan: the cost of the trailing Sunday-to-Sunday
//! week relative to an arbitrary reference instant, the cost broken
//! down per calendar day and per day-of-week, and the rank of the plan
//! against every other available plan.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod plan;
pub mod prelude;
pub mod quantity;
pub mod reading;
pub mod service;
pub mod store;
pub mod tables;
