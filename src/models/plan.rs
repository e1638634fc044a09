//! Print plan (solution) model.
//!
//! A print plan is the ordered output of one batching pass: the job
//! order, the total wall-clock time, and the batches that produced them.

use serde::{Deserialize, Serialize};

/// How a batch entered the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchKind {
    /// Jobs admitted under the printer limits.
    Grouped,
    /// A single job too large to fit the printer on its own.
    ///
    /// It is still printed, outside the batching discipline.
    Overflow,
}

/// A flushed batch of jobs printed concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Member job IDs in admission order.
    pub job_ids: Vec<String>,
    /// Sum of member volumes.
    pub volume: f64,
    /// Slowest member's print time (minutes).
    pub duration: i64,
    /// Grouped batch or overflow singleton.
    pub kind: BatchKind,
}

impl Batch {
    /// Number of jobs in the batch.
    #[inline]
    pub fn len(&self) -> usize {
        self.job_ids.len()
    }

    /// Whether the batch holds no jobs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }

    /// Whether this is an overflow singleton.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        self.kind == BatchKind::Overflow
    }
}

/// Result of a batching pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintPlan {
    /// Job IDs in print order.
    pub print_order: Vec<String>,
    /// Total wall-clock time (minutes).
    pub total_time: i64,
    /// Batches in print order.
    #[serde(default)]
    pub batches: Vec<Batch>,
}

impl PrintPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch, extending the print order and total time.
    ///
    /// The total saturates at `i64::MAX` instead of wrapping.
    pub fn push_batch(&mut self, batch: Batch) {
        self.print_order.extend(batch.job_ids.iter().cloned());
        self.total_time = self.total_time.saturating_add(batch.duration);
        self.batches.push(batch);
    }

    /// Number of batches, overflow singletons included.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Overflow singletons in print order.
    pub fn overflow_batches(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter().filter(|b| b.is_overflow())
    }

    /// Finds the batch containing a job.
    pub fn batch_for_job(&self, job_id: &str) -> Option<&Batch> {
        self.batches
            .iter()
            .find(|b| b.job_ids.iter().any(|id| id == job_id))
    }
}
