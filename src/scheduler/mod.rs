//! Greedy print batching and plan KPI evaluation.
//!
//! # Algorithm
//!
//! `BatchScheduler` sorts jobs by priority and fills one batch at a time
//! until the printer's volume or item limit would be exceeded. It is not
//! optimal, but runs in a single pass after the sort.
//!
//! # KPI
//!
//! `PlanKpi` reports wall-clock time, time saved over sequential
//! printing, overflow count, and batch utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Potts & Kovalyov (2000), "Scheduling with batching: A review"

mod batching;
mod kpi;

pub use batching::{optimize_printing, BatchScheduler};
pub use kpi::PlanKpi;
