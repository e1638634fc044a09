//! Print job model.
//!
//! A print job is a single part queued for a 3D printer. Jobs that share
//! a batch print concurrently on the same build plate.

use serde::{Deserialize, Serialize};

/// A print job to be batched.
///
/// # Time Representation
/// `print_time` is wall-clock print duration in minutes. The consumer
/// may use any unit as long as it is consistent across jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    /// Unique job identifier.
    pub id: String,
    /// Material volume the part occupies on the printer.
    pub volume: f64,
    /// Scheduling priority (lower = printed earlier).
    pub priority: i32,
    /// Print duration (minutes).
    pub print_time: i64,
}

impl PrintJob {
    /// Creates a new job with zero volume, priority 0 and zero print time.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            volume: 0.0,
            priority: 0,
            print_time: 0,
        }
    }

    /// Sets the volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the print duration (minutes).
    pub fn with_print_time(mut self, print_time: i64) -> Self {
        self.print_time = print_time;
        self
    }
}
