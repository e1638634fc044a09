//! Combinatorial optimization kernels for the U-Engine ecosystem.
//!
//! Two independent components, with no shared state between them:
//!
//! - **Print batching**: greedy, capacity-constrained batching of print
//!   jobs under a simultaneous volume limit and item limit.
//! - **Rod cutting**: revenue maximization by memoized recursion or by
//!   tabulation.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `PrintJob`, `PrinterConstraints`, `Batch`,
//!   `PrintPlan`, `RodCutRequest`, `CutPlan`
//! - **`scheduler`**: `BatchScheduler`, `optimize_printing`, `PlanKpi`
//! - **`rod`**: `MemoizedSolver`, `TabulatedSolver`, `CutStrategy`
//! - **`validation`**: Opt-in input checks (duplicate IDs, bad volumes, short price tables)
//! - **`error`**: Crate error type
//!
//! # Logging
//!
//! Emits `tracing` events (batch flushes, overflow jobs, solver summaries).
//! No subscriber is installed by this crate.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

pub mod error;
pub mod models;
pub mod rod;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
