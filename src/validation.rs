//! Input validation for job sequencing problems.
//!
//! Checks raw job records before a registry is built. Detects:
//! - An empty job list
//! - Empty or duplicate IDs
//! - Deadlines before the first slot
//! - Negative profits
//! - A profit total that does not fit in [`Profit`]
//!
//! Nothing is corrected silently: a duplicate ID is reported, never renamed.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{JobInput, Profit};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// No jobs were supplied.
    Empty,
    /// A job has an empty ID.
    EmptyId,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A deadline is below 1.
    InvalidDeadline,
    /// A profit is below 0.
    NegativeProfit,
    /// The profits together exceed the profit type's range.
    ProfitOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates raw job records.
///
/// Checks, per record in input order:
/// 1. ID is not empty
/// 2. ID was not seen before
/// 3. Deadline is at least 1
/// 4. Profit is not negative
///
/// Then the non-negative profits are summed; a total past [`Profit::MAX`]
/// yields one trailing `ProfitOverflow` error. Every subset of a valid job
/// list therefore has a representable profit.
///
/// An empty input yields a single `Empty` error.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[JobInput]) -> ValidationResult {
    if jobs.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::Empty,
            "No jobs supplied",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut total: Option<Profit> = Some(0);

    for (position, job) in jobs.iter().enumerate() {
        if job.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Job at position {position} has an empty ID"),
            ));
        } else if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.deadline < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDeadline,
                format!(
                    "Job '{}' has deadline {}; deadlines start at slot 1",
                    job.id, job.deadline
                ),
            ));
        }

        if job.profit < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeProfit,
                format!("Job '{}' has negative profit {}", job.id, job.profit),
            ));
        } else {
            total = total.and_then(|sum| sum.checked_add(job.profit.unsigned_abs()));
        }
    }

    if total.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::ProfitOverflow,
            format!("Total profit exceeds {}", Profit::MAX),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
