//! Job registry.
//!
//! The validated, immutable job set for one solve request. Strategies
//! borrow its jobs read-only and sort their own working copies.

use std::collections::BTreeMap;

use serde::Serialize;

use super::job::{max_deadline, usable_slots, Job, JobInput, Profit};
use crate::validation::{validate_jobs, ValidationError};

/// A validated, non-empty set of jobs.
///
/// # Invariants
/// - At least one job
/// - IDs are non-empty and unique
/// - Every deadline is at least 1
/// - The sum of all profits fits in [`Profit`]
///
/// # Example
/// ```
/// use jobseq::models::{JobInput, JobRegistry};
///
/// let registry = JobRegistry::build(vec![
///     JobInput::new("A", 2, 100),
///     JobInput::new("B", 1, 19),
/// ])
/// .unwrap();
/// assert_eq!(registry.max_deadline(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRegistry {
    jobs: Vec<Job>,
    max_deadline: usize,
}

impl JobRegistry {
    /// Validates the records and builds a registry.
    ///
    /// Fails with the first error reported by
    /// [`validate_jobs`](crate::validation::validate_jobs).
    pub fn build(inputs: impl IntoIterator<Item = JobInput>) -> Result<Self, ValidationError> {
        let inputs: Vec<JobInput> = inputs.into_iter().collect();

        if let Err(errors) = validate_jobs(&inputs) {
            if let Some(first) = errors.into_iter().next() {
                return Err(first);
            }
        }

        // Validated: deadline >= 1 and profit >= 0. A deadline past `usize`
        // saturates, which changes nothing since only `min(deadline, len)`
        // is ever used.
        let jobs: Vec<Job> = inputs
            .into_iter()
            .map(|input| {
                Job::from_parts(
                    input.id,
                    usize::try_from(input.deadline).unwrap_or(usize::MAX),
                    input.profit.unsigned_abs(),
                    input.description,
                )
            })
            .collect();

        let max_deadline = max_deadline(&jobs);
        Ok(Self { jobs, max_deadline })
    }

    /// Jobs in input order.
    #[inline]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Number of jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Always `false`; a registry holds at least one job.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Largest deadline.
    #[inline]
    pub fn max_deadline(&self) -> usize {
        self.max_deadline
    }

    /// Length of the slot line: `min(max_deadline, len)`.
    #[inline]
    pub fn usable_slots(&self) -> usize {
        usable_slots(&self.jobs)
    }

    /// Looks up a job by ID.
    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id() == id)
    }

    /// Sum of all profits, scheduled or not.
    pub fn total_profit(&self) -> Profit {
        self.jobs.iter().map(Job::profit).sum()
    }

    /// Number of jobs per deadline, ordered by deadline.
    pub fn deadline_distribution(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for job in &self.jobs {
            *counts.entry(job.deadline()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of jobs per profit value, ordered by profit.
    pub fn profit_distribution(&self) -> BTreeMap<Profit, usize> {
        let mut counts = BTreeMap::new();
        for job in &self.jobs {
            *counts.entry(job.profit()).or_insert(0) += 1;
        }
        counts
    }
}
