//! Print plan quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Time | Sum of batch durations (the plan's wall-clock time) |
//! | Sequential Time | Sum of every job's print time, as if printed one by one |
//! | Time Saved | Sequential time minus total time |
//! | Batch Count | Grouped batches (overflow singletons excluded) |
//! | Overflow Count | Jobs printed outside the capacity limits |
//! | Avg Volume Utilization | Mean of batch volume / max volume |
//! | Avg Fill Rate | Mean of batch size / max items |

use crate::models::{PrintJob, PrintPlan, PrinterConstraints};

/// Print plan performance indicators.
///
/// Times are in the same unit as `PrintJob::print_time`, saturating at
/// the `i64` bounds.
#[derive(Debug, Clone)]
pub struct PlanKpi {
    /// Plan wall-clock time.
    pub total_time: i64,
    /// Time to print every job alone, back to back.
    pub sequential_time: i64,
    /// Sequential time minus plan time.
    pub time_saved: i64,
    /// Number of grouped batches.
    pub batch_count: usize,
    /// Number of overflow singletons.
    pub overflow_count: usize,
    /// Mean volume utilization of grouped batches (0.0..1.0).
    pub avg_volume_utilization: f64,
    /// Mean item fill rate of grouped batches (0.0..1.0).
    pub avg_fill_rate: f64,
}

impl PlanKpi {
    /// Computes KPIs from a plan, its input jobs and the printer limits.
    pub fn calculate(plan: &PrintPlan, jobs: &[PrintJob], constraints: &PrinterConstraints) -> Self {
        let sequential_time = jobs
            .iter()
            .fold(0i64, |acc, j| acc.saturating_add(j.print_time));

        let mut batch_count = 0usize;
        let mut overflow_count = 0usize;
        let mut volume_util_sum = 0.0;
        let mut fill_sum = 0.0;

        for batch in &plan.batches {
            if batch.is_overflow() {
                overflow_count += 1;
                continue;
            }
            batch_count += 1;
            if constraints.max_volume > 0.0 {
                volume_util_sum += batch.volume / constraints.max_volume;
            }
            if constraints.max_items > 0 {
                fill_sum += batch.len() as f64 / constraints.max_items as f64;
            }
        }

        let (avg_volume_utilization, avg_fill_rate) = if batch_count == 0 {
            (0.0, 0.0)
        } else {
            (
                volume_util_sum / batch_count as f64,
                fill_sum / batch_count as f64,
            )
        };

        Self {
            total_time: plan.total_time,
            sequential_time,
            time_saved: sequential_time.saturating_sub(plan.total_time),
            batch_count,
            overflow_count,
            avg_volume_utilization,
            avg_fill_rate,
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_total_time: i64, min_utilization: f64) -> bool {
        self.total_time <= max_total_time && self.avg_volume_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::optimize_printing;

    fn job(id: &str, volume: f64, print_time: i64) -> PrintJob {
        PrintJob::new(id)
            .with_volume(volume)
            .with_priority(1)
            .with_print_time(print_time)
    }

    #[test]
    fn test_kpi_basic() {
        let jobs = vec![
            job("M1", 100.0, 120),
            job("M2", 150.0, 90),
            job("M3", 120.0, 150),
        ];
        let printer = PrinterConstraints::new(300.0, 2);
        let plan = optimize_printing(&jobs, &printer);

        let kpi = PlanKpi::calculate(&plan, &jobs, &printer);
        assert_eq!(kpi.total_time, 270);
        assert_eq!(kpi.sequential_time, 360);
        assert_eq!(kpi.time_saved, 90);
        assert_eq!(kpi.batch_count, 2);
        assert_eq!(kpi.overflow_count, 0);
        // (250/300 + 120/300) / 2
        assert!((kpi.avg_volume_utilization - 370.0 / 600.0).abs() < 1e-10);
        // (2/2 + 1/2) / 2
        assert!((kpi.avg_fill_rate - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_overflow_excluded() {
        let jobs = vec![job("A", 300.0, 10), job("X", 900.0, 60)];
        let printer = PrinterConstraints::new(300.0, 2);
        let plan = optimize_printing(&jobs, &printer);

        let kpi = PlanKpi::calculate(&plan, &jobs, &printer);
        assert_eq!(kpi.batch_count, 1);
        assert_eq!(kpi.overflow_count, 1);
        assert!((kpi.avg_volume_utilization - 1.0).abs() < 1e-10);
        assert_eq!(kpi.time_saved, 0);
    }

    #[test]
    fn test_kpi_saturates_on_huge_times() {
        let jobs = vec![job("A", 400.0, i64::MAX), job("B", 400.0, i64::MAX)];
        let printer = PrinterConstraints::new(300.0, 2);
        let plan = optimize_printing(&jobs, &printer);

        let kpi = PlanKpi::calculate(&plan, &jobs, &printer);
        assert_eq!(plan.total_time, i64::MAX);
        assert_eq!(kpi.sequential_time, i64::MAX);
        assert_eq!(kpi.time_saved, 0);
        assert_eq!(kpi.overflow_count, 2);
    }

    #[test]
    fn test_kpi_empty() {
        let printer = PrinterConstraints::new(300.0, 2);
        let kpi = PlanKpi::calculate(&PrintPlan::new(), &[], &printer);
        assert_eq!(kpi.total_time, 0);
        assert_eq!(kpi.batch_count, 0);
        assert!((kpi.avg_volume_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.avg_fill_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let jobs = vec![job("M1", 150.0, 100), job("M2", 150.0, 80)];
        let printer = PrinterConstraints::new(300.0, 2);
        let plan = optimize_printing(&jobs, &printer);

        let kpi = PlanKpi::calculate(&plan, &jobs, &printer);
        assert!(kpi.meets_thresholds(100, 1.0));
        assert!(!kpi.meets_thresholds(99, 0.0));
        assert!(!kpi.meets_thresholds(100, 1.5));
    }
}
