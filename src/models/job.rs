//! Job model.
//!
//! A job needs exactly one unit time slot, must finish at or before its
//! deadline slot, and earns its profit only when scheduled.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4

use serde::{Deserialize, Serialize};

/// Profit earned by a scheduled job.
pub type Profit = u64;

/// A raw job record as supplied by an input-collection layer.
///
/// Values are unchecked; negative or zero values are rejected when a
/// [`JobRegistry`](super::JobRegistry) is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInput {
    /// Job identifier.
    pub id: String,
    /// Last slot index the job may occupy.
    pub deadline: i64,
    /// Profit earned if scheduled.
    pub profit: i64,
    /// Free-form description. Not used by any strategy.
    #[serde(default)]
    pub description: String,
}

impl JobInput {
    /// Creates a new job record.
    pub fn new(id: impl Into<String>, deadline: i64, profit: i64) -> Self {
        Self {
            id: id.into(),
            deadline,
            profit,
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A validated job.
///
/// Only constructed by the registry, so `deadline >= 1` and a non-empty
/// `id` always hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    id: String,
    deadline: usize,
    profit: Profit,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
}

impl Job {
    pub(crate) fn from_parts(
        id: String,
        deadline: usize,
        profit: Profit,
        description: String,
    ) -> Self {
        Self {
            id,
            deadline,
            profit,
            description,
        }
    }

    /// Unique job identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Last slot (1-based) the job may occupy.
    #[inline]
    pub fn deadline(&self) -> usize {
        self.deadline
    }

    /// Profit earned if scheduled.
    #[inline]
    pub fn profit(&self) -> Profit {
        self.profit
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Largest deadline in a job slice, `0` for an empty slice.
pub fn max_deadline(jobs: &[Job]) -> usize {
    jobs.iter().map(Job::deadline).max().unwrap_or(0)
}

/// Number of slots a schedule over `jobs` can ever use.
///
/// At most one job runs per slot, so slots past `jobs.len()` stay idle and a
/// deadline of `d >= jobs.len()` behaves exactly like `jobs.len()`. Slot
/// lines, tables and timelines are sized by this value, never by a raw
/// deadline.
pub fn usable_slots(jobs: &[Job]) -> usize {
    max_deadline(jobs).min(jobs.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_input_builder() {
        let input = JobInput::new("J1", 3, 40).with_description("rush order");
        assert_eq!(input.id, "J1");
        assert_eq!(input.deadline, 3);
        assert_eq!(input.profit, 40);
        assert_eq!(input.description, "rush order");
    }

    #[test]
    fn test_job_accessors() {
        let job = Job::from_parts("A".into(), 2, 100, String::new());
        assert_eq!(job.id(), "A");
        assert_eq!(job.deadline(), 2);
        assert_eq!(job.profit(), 100);
        assert!(job.description().is_empty());
    }

    #[test]
    fn test_max_deadline() {
        let jobs = vec![
            Job::from_parts("A".into(), 2, 1, String::new()),
            Job::from_parts("B".into(), 7, 1, String::new()),
        ];
        assert_eq!(max_deadline(&jobs), 7);
        assert_eq!(max_deadline(&[]), 0);
    }

    #[test]
    fn test_usable_slots_bounded_by_job_count() {
        let jobs = vec![
            Job::from_parts("A".into(), 2, 1, String::new()),
            Job::from_parts("B".into(), usize::MAX, 1, String::new()),
        ];
        assert_eq!(usable_slots(&jobs), 2);
        assert_eq!(usable_slots(&jobs[..1]), 1);
        assert_eq!(usable_slots(&[]), 0);
    }

    #[test]
    fn test_job_input_deserialize_without_description() {
        let input: JobInput =
            serde_json::from_str(r#"{"id":"J9","deadline":4,"profit":12}"#).unwrap();
        assert_eq!(input, JobInput::new("J9", 4, 12));
    }
}
