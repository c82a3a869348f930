//! Dynamic-programming strategies.
//!
//! # Slot DP (heuristic)
//!
//! A single knapsack-style array `dp[0..=d]` indexed by slot, where `d` is
//! the number of usable slots. Jobs are taken in profit-descending order;
//! each scans its slots from the deadline down. The first empty slot takes
//! the job. Occupied slots passed on the way are
//! relaxed with `dp[j] = max(dp[j], dp[j - 1] + profit)`.
//!
//! The reported profit is the sum over the jobs that took a slot. The table
//! value `dp[d]` is exposed separately through [`SlotDp::knapsack_value`];
//! it depends on iteration order and can over- or under-count the real
//! optimum, so it is informational only.
//!
//! # Two-dimensional DP (exact)
//!
//! Jobs are sorted by deadline (stable). `dp[i][j]` is the best profit using
//! the first `i` jobs and at most `j` slots:
//!
//! ```text
//! dp[i][j] = max(dp[i-1][j], dp[i-1][min(j, d_i) - 1] + p_i)
//! ```
//!
//! Exclusion wins ties. Any feasible set can be run in deadline order, so
//! the chosen jobs are laid out back to back from slot 1.
//!
//! # Reference
//! Lawler & Moore (1969), "A Functional Equation and its Application to
//! Resource Allocation and Sequencing Problems"

use std::cmp::Reverse;

use tracing::trace;

use super::{SequencingStrategy, StrategyId};
use crate::models::{usable_slots, Job, Profit, SchedulingResult};
use crate::slots::TimeSlotLine;

/// Single-array knapsack-style slot table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotDp;

impl SlotDp {
    /// Final value of the slot table, `dp[usable_slots]`.
    ///
    /// Not a profit guarantee; see the module docs.
    pub fn knapsack_value(jobs: &[Job]) -> Profit {
        let (_, table) = Self::run(jobs);
        table.last().copied().unwrap_or(0)
    }

    fn run(jobs: &[Job]) -> (SchedulingResult, Vec<Profit>) {
        let slot_count = usable_slots(jobs);
        let mut result = SchedulingResult::new(StrategyId::SlotDp, slot_count);
        let mut table: Vec<Profit> = vec![0; slot_count + 1];
        let mut line = TimeSlotLine::new(slot_count);

        let mut order: Vec<usize> = (0..jobs.len()).collect();
        order.sort_by_key(|&i| Reverse(jobs[i].profit()));

        for index in order {
            let job = &jobs[index];
            for slot in (1..=job.deadline().min(slot_count)).rev() {
                if line.fill(slot, job) {
                    table[slot] = job.profit();
                    result.record(job, slot);
                    trace!(job = job.id(), slot, "slot dp placed");
                    break;
                }
                table[slot] = table[slot].max(table[slot - 1] + job.profit());
            }
        }

        (result, table)
    }
}

impl SequencingStrategy for SlotDp {
    fn id(&self) -> StrategyId {
        StrategyId::SlotDp
    }

    fn solve(&self, jobs: &[Job]) -> SchedulingResult {
        Self::run(jobs).0
    }
}

/// Items x slot-capacity table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoDimensionalDp;

/// Filled `(n + 1) x (slots + 1)` table, row-major, rows in deadline order.
struct CapacityTable {
    order: Vec<usize>,
    width: usize,
    values: Vec<Profit>,
    taken: Vec<bool>,
}

impl CapacityTable {
    fn fill(jobs: &[Job], slot_count: usize) -> Self {
        let mut order: Vec<usize> = (0..jobs.len()).collect();
        order.sort_by_key(|&i| jobs[i].deadline());

        let width = slot_count + 1;
        let mut values: Vec<Profit> = vec![0; (jobs.len() + 1) * width];
        let mut taken = vec![false; (jobs.len() + 1) * width];

        for row in 1..=jobs.len() {
            let job = &jobs[order[row - 1]];
            let above = (row - 1) * width;
            let here = row * width;
            for capacity in 1..=slot_count {
                let skip = values[above + capacity];
                let reach = capacity.min(job.deadline());
                let take = values[above + reach - 1] + job.profit();
                if skip >= take {
                    values[here + capacity] = skip;
                } else {
                    values[here + capacity] = take;
                    taken[here + capacity] = true;
                }
            }
        }

        Self {
            order,
            width,
            values,
            taken,
        }
    }

    /// `dp[n][slots]`.
    fn best(&self) -> Profit {
        self.values.last().copied().unwrap_or(0)
    }

    /// Chosen job indices in deadline order.
    fn picked(&self, jobs: &[Job]) -> Vec<usize> {
        let mut capacity = self.width - 1;
        let mut picked = Vec::new();
        for row in (1..=self.order.len()).rev() {
            if self.taken[row * self.width + capacity] {
                let index = self.order[row - 1];
                picked.push(index);
                capacity = capacity.min(jobs[index].deadline()) - 1;
            }
        }
        picked.reverse();
        picked
    }
}

impl SequencingStrategy for TwoDimensionalDp {
    fn id(&self) -> StrategyId {
        StrategyId::TwoDimensionalDp
    }

    fn solve(&self, jobs: &[Job]) -> SchedulingResult {
        let slot_count = usable_slots(jobs);
        let mut result = SchedulingResult::new(self.id(), slot_count);
        if jobs.is_empty() {
            return result;
        }

        let table = CapacityTable::fill(jobs, slot_count);
        let picked = table.picked(jobs);
        trace!(best = table.best(), picked = picked.len(), "two-dimensional dp table");

        result.record_consecutive(picked.iter().map(|&i| &jobs[i]));
        result
    }
}
