//! Domain models for batching and rod cutting.
//!
//! | Type | Role |
//! |------|------|
//! | `PrintJob` | A part queued for printing |
//! | `PrinterConstraints` | Simultaneous volume and item limits |
//! | `Batch` / `BatchKind` | A flushed group of concurrently printed jobs |
//! | `PrintPlan` | Ordered batching result |
//! | `RodCutRequest` | Rod length and price table |
//! | `CutPlan` | Optimal profit and piece list |

mod constraints;
mod cut;
mod job;
mod plan;

pub use constraints::PrinterConstraints;
pub use cut::{CutPlan, RodCutRequest};
pub use job::PrintJob;
pub use plan::{Batch, BatchKind, PrintPlan};
