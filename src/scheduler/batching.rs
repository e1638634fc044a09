//! Greedy capacity-constrained batch scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort jobs by priority (ascending, ties keep input order).
//! 2. Admit each job into the open batch while volume and item limits hold.
//! 3. On rejection, flush the open batch and seed a new one with the job.
//! 4. A job that does not fit an empty batch is printed alone as an
//!    overflow singleton, outside the limits.
//! 5. Flush whatever batch remains open.
//!
//! Batch members print concurrently, so a batch costs its slowest
//! member's print time rather than the sum.
//!
//! # Complexity
//! O(n log n) for the sort plus a single O(n) scan.

use crate::models::{Batch, BatchKind, PrintJob, PrintPlan, PrinterConstraints};

/// Greedy batch scheduler for one printer.
///
/// # Example
///
/// ```
/// use u_combopt::models::{PrintJob, PrinterConstraints};
/// use u_combopt::scheduler::BatchScheduler;
///
/// let jobs = vec![
///     PrintJob::new("M1").with_volume(100.0).with_priority(1).with_print_time(120),
///     PrintJob::new("M2").with_volume(150.0).with_priority(1).with_print_time(90),
///     PrintJob::new("M3").with_volume(120.0).with_priority(1).with_print_time(150),
/// ];
/// let scheduler = BatchScheduler::new(PrinterConstraints::new(300.0, 2));
///
/// let plan = scheduler.schedule(&jobs);
/// assert_eq!(plan.print_order, vec!["M1", "M2", "M3"]);
/// assert_eq!(plan.total_time, 270);
/// ```
#[derive(Debug, Clone)]
pub struct BatchScheduler {
    constraints: PrinterConstraints,
}

impl BatchScheduler {
    /// Creates a scheduler for the given printer.
    pub fn new(constraints: PrinterConstraints) -> Self {
        Self { constraints }
    }

    /// Printer limits this scheduler enforces.
    pub fn constraints(&self) -> &PrinterConstraints {
        &self.constraints
    }

    /// Batches jobs into a print plan.
    ///
    /// Input is not validated: negative or non-finite values flow through
    /// the admission arithmetic unchanged.
    pub fn schedule(&self, jobs: &[PrintJob]) -> PrintPlan {
        let mut plan = PrintPlan::new();
        let mut open = OpenBatch::default();

        for job in sort_by_priority(jobs) {
            if open.admits(job, &self.constraints) {
                open.push(job);
                continue;
            }

            flush(&mut plan, &mut open);

            if OpenBatch::default().admits(job, &self.constraints) {
                open.push(job);
            } else {
                tracing::warn!(
                    job_id = %job.id,
                    volume = job.volume,
                    max_volume = self.constraints.max_volume,
                    "job exceeds printer capacity alone, printing as overflow"
                );
                plan.push_batch(Batch {
                    job_ids: vec![job.id.clone()],
                    volume: job.volume,
                    duration: job.print_time,
                    kind: BatchKind::Overflow,
                });
            }
        }

        flush(&mut plan, &mut open);
        plan
    }
}

/// Batches jobs under the given printer limits.
///
/// Shorthand for `BatchScheduler::new(*constraints).schedule(jobs)`.
pub fn optimize_printing(jobs: &[PrintJob], constraints: &PrinterConstraints) -> PrintPlan {
    BatchScheduler::new(*constraints).schedule(jobs)
}

/// Returns jobs ordered by ascending priority; equal priorities keep input order.
fn sort_by_priority(jobs: &[PrintJob]) -> Vec<&PrintJob> {
    let mut sorted: Vec<&PrintJob> = jobs.iter().collect();
    sorted.sort_by_key(|job| job.priority);
    sorted
}

/// Batch being accumulated during a single scheduling pass.
#[derive(Debug, Default)]
struct OpenBatch<'a> {
    jobs: Vec<&'a PrintJob>,
    volume: f64,
    duration: i64,
}

impl<'a> OpenBatch<'a> {
    fn admits(&self, job: &PrintJob, constraints: &PrinterConstraints) -> bool {
        constraints.admits(self.volume + job.volume, self.jobs.len() + 1)
    }

    fn push(&mut self, job: &'a PrintJob) {
        self.volume += job.volume;
        self.duration = self.duration.max(job.print_time);
        self.jobs.push(job);
    }
}

/// Moves a non-empty open batch into the plan and resets it.
fn flush(plan: &mut PrintPlan, open: &mut OpenBatch<'_>) {
    if open.jobs.is_empty() {
        return;
    }
    let done = std::mem::take(open);
    let batch = Batch {
        job_ids: done.jobs.iter().map(|j| j.id.clone()).collect(),
        volume: done.volume,
        duration: done.duration,
        kind: BatchKind::Grouped,
    };
    tracing::debug!(
        batch = plan.batch_count(),
        jobs = batch.len(),
        volume = batch.volume,
        duration = batch.duration,
        "flushed batch"
    );
    plan.push_batch(batch);
}
