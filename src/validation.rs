//! Input validation for batching and rod-cutting problems.
//!
//! The algorithms never validate their input. Callers that want to reject
//! malformed data up front run these checks first. Detects:
//! - Duplicate or empty job IDs
//! - Negative or non-finite volumes
//! - Negative print times
//! - Unusable printer limits
//! - Price tables that do not cover the rod, or contain negative prices

use crate::models::{PrintJob, PrinterConstraints};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job has an empty ID.
    EmptyId,
    /// A job volume is negative, NaN, or infinite.
    InvalidVolume,
    /// A job print time is negative.
    NegativePrintTime,
    /// Printer limits admit no job at all, or are not finite.
    InvalidConstraints,
    /// The price table has fewer entries than the rod length.
    PriceTableTooShort,
    /// A piece has a negative price.
    NegativePrice,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates print jobs and printer limits.
///
/// Checks:
/// 1. `max_items >= 1`, `max_volume` finite and non-negative
/// 2. No empty job IDs
/// 3. No duplicate job IDs
/// 4. Volumes finite and non-negative
/// 5. Print times non-negative
///
/// Jobs larger than `max_volume` are not errors: the scheduler prints
/// them as overflow singletons.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[PrintJob], constraints: &PrinterConstraints) -> ValidationResult {
    let mut errors = Vec::new();

    if constraints.max_items == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraints,
            "max_items must be at least 1",
        ));
    }
    if !constraints.max_volume.is_finite() || constraints.max_volume < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraints,
            format!(
                "max_volume must be finite and non-negative, got {}",
                constraints.max_volume
            ),
        ));
    }

    let mut ids = HashSet::new();
    for job in jobs {
        if job.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Job with empty ID",
            ));
        } else if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if !job.volume.is_finite() || job.volume < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidVolume,
                format!("Job '{}' has invalid volume {}", job.id, job.volume),
            ));
        }

        if job.print_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePrintTime,
                format!("Job '{}' has negative print time {}", job.id, job.print_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a rod-cutting instance.
///
/// Checks that `prices` covers every piece length up to `length` and that
/// no covered price is negative.
pub fn validate_rod(length: usize, prices: &[i64]) -> ValidationResult {
    let mut errors = Vec::new();

    if prices.len() < length {
        errors.push(ValidationError::new(
            ValidationErrorKind::PriceTableTooShort,
            format!(
                "Rod length {} needs {} prices, got {}",
                length,
                length,
                prices.len()
            ),
        ));
    }

    for (i, &price) in prices.iter().take(length).enumerate() {
        if price < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativePrice,
                format!("Piece length {} has negative price {}", i + 1, price),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
