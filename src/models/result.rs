//! Scheduling result (solution) model.
//!
//! A result records which jobs a strategy selected, in the order the
//! strategy assigned them, and the slot each one occupies.

use serde::{Deserialize, Serialize};

use super::job::{Job, Profit};
use crate::strategy::StrategyId;

/// Outcome of one strategy run over one job set.
///
/// `selected_jobs` keeps assignment order, which is not necessarily
/// chronological. `timeline` is the chronological view: entry `k` holds
/// the ID of the job in slot `k + 1`, or `None` if the slot is idle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Strategy that produced this result.
    pub strategy: StrategyId,
    /// Sum of profits over `selected_jobs`.
    pub total_profit: Profit,
    /// Scheduled jobs in assignment order.
    pub selected_jobs: Vec<Job>,
    /// Job ID per slot, one entry per usable slot
    /// ([`usable_slots`](super::usable_slots)).
    pub timeline: Vec<Option<String>>,
}

impl SchedulingResult {
    /// Creates an empty result with `slot_count` idle slots.
    pub fn new(strategy: StrategyId, slot_count: usize) -> Self {
        Self {
            strategy,
            total_profit: 0,
            selected_jobs: Vec::new(),
            timeline: vec![None; slot_count],
        }
    }

    /// Records `job` as scheduled in `slot` (1-based).
    pub(crate) fn record(&mut self, job: &Job, slot: usize) {
        debug_assert!(slot >= 1 && slot <= job.deadline());
        self.total_profit += job.profit();
        self.selected_jobs.push(job.clone());
        if let Some(entry) = self.timeline.get_mut(slot - 1) {
            *entry = Some(job.id().to_string());
        }
    }

    /// Records `jobs` back to back from slot 1, in the given order.
    ///
    /// Callers pass jobs in non-decreasing deadline order so every job
    /// lands at or before its deadline.
    pub(crate) fn record_consecutive<'a>(&mut self, jobs: impl IntoIterator<Item = &'a Job>) {
        for (offset, job) in jobs.into_iter().enumerate() {
            self.record(job, offset + 1);
        }
    }

    /// Number of scheduled jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.selected_jobs.len()
    }

    /// Whether no job was scheduled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected_jobs.is_empty()
    }

    /// IDs of scheduled jobs in assignment order.
    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected_jobs.iter().map(Job::id).collect()
    }

    /// Whether the job with `id` was scheduled.
    pub fn contains(&self, id: &str) -> bool {
        self.selected_jobs.iter().any(|job| job.id() == id)
    }

    /// Slot (1-based) occupied by the job with `id`.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.timeline
            .iter()
            .position(|entry| entry.as_deref() == Some(id))
            .map(|index| index + 1)
    }

    /// Latest occupied slot, `0` if nothing was scheduled.
    pub fn last_used_slot(&self) -> usize {
        self.timeline
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |index| index + 1)
    }
}
