//! Exhaustive search strategies.
//!
//! Both searches keep the current partial schedule on a single stack of job
//! indices (pushed on descent, popped on backtrack) instead of copying the
//! sequence at every node. The stack order is also the slot order: the job
//! at stack position `k` occupies slot `k + 1`.
//!
//! A new incumbent is recorded only on a strictly greater profit, so the
//! first schedule found with the maximal profit is the one returned.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 7-8

use tracing::debug;

use super::{SequencingStrategy, StrategyId};
use crate::models::{usable_slots, Job, Profit, SchedulingResult};

/// Best schedule seen so far.
#[derive(Debug, Default)]
struct Incumbent {
    profit: Profit,
    jobs: Vec<usize>,
}

impl Incumbent {
    fn offer(&mut self, profit: Profit, stack: &[usize]) {
        if profit > self.profit {
            self.profit = profit;
            self.jobs.clear();
            self.jobs.extend_from_slice(stack);
        }
    }
}

/// Exhaustive permutation search.
///
/// Tries every job in every free position, filling slots from 1 upward.
/// Job `i` may take the next slot `k` (0-based) only if `k < deadline_i`.
///
/// Runs in O(n!) time: intended for small instances and for checking the
/// other strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backtracking;

struct PermutationSearch<'a> {
    jobs: &'a [Job],
    used: Vec<bool>,
    stack: Vec<usize>,
    profit: Profit,
    best: Incumbent,
    nodes: u64,
}

impl PermutationSearch<'_> {
    fn explore(&mut self) {
        self.nodes += 1;
        self.best.offer(self.profit, &self.stack);

        let slot = self.stack.len();
        for index in 0..self.jobs.len() {
            if self.used[index] || slot >= self.jobs[index].deadline() {
                continue;
            }
            let profit = self.jobs[index].profit();

            self.used[index] = true;
            self.stack.push(index);
            self.profit += profit;

            self.explore();

            self.profit -= profit;
            self.stack.pop();
            self.used[index] = false;
        }
    }
}

impl SequencingStrategy for Backtracking {
    fn id(&self) -> StrategyId {
        StrategyId::Backtracking
    }

    fn solve(&self, jobs: &[Job]) -> SchedulingResult {
        let mut search = PermutationSearch {
            jobs,
            used: vec![false; jobs.len()],
            stack: Vec::with_capacity(usable_slots(jobs)),
            profit: 0,
            best: Incumbent::default(),
            nodes: 0,
        };
        search.explore();
        debug!(nodes = search.nodes, best = search.best.profit, "backtracking done");

        let mut result = SchedulingResult::new(self.id(), usable_slots(jobs));
        result.record_consecutive(search.best.jobs.iter().map(|&i| &jobs[i]));
        result
    }
}

/// Include/skip depth-first search over jobs in deadline order.
///
/// At depth `i` the search first tries to append job `i` to the schedule
/// (allowed while fewer than `deadline_i` slots are used), then skips it.
/// A branch ends when all jobs are decided or every slot is used. With the
/// profit bound enabled (the default), a branch is also cut when its
/// current profit plus all undecided profit cannot beat the incumbent.
///
/// The bound never changes the returned schedule, only the work done.
#[derive(Debug, Clone, Copy)]
pub struct BranchAndBound {
    profit_bound: bool,
}

impl Default for BranchAndBound {
    fn default() -> Self {
        Self { profit_bound: true }
    }
}

impl BranchAndBound {
    /// Creates the strategy with the profit bound enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the remaining-profit bound.
    pub fn with_profit_bound(mut self, enabled: bool) -> Self {
        self.profit_bound = enabled;
        self
    }
}

struct SubsetSearch<'a> {
    jobs: &'a [Job],
    order: Vec<usize>,
    /// `remaining[i]` = sum of profits of `order[i..]`.
    remaining: Vec<Profit>,
    slot_count: usize,
    profit_bound: bool,
    stack: Vec<usize>,
    profit: Profit,
    best: Incumbent,
    nodes: u64,
    pruned: u64,
}

impl SubsetSearch<'_> {
    fn branch(&mut self, depth: usize) {
        self.nodes += 1;
        self.best.offer(self.profit, &self.stack);

        if depth == self.order.len() || self.stack.len() == self.slot_count {
            return;
        }
        if self.profit_bound && self.profit + self.remaining[depth] <= self.best.profit {
            self.pruned += 1;
            return;
        }

        let index = self.order[depth];
        let (deadline, profit) = (self.jobs[index].deadline(), self.jobs[index].profit());
        if self.stack.len() < deadline {
            self.stack.push(index);
            self.profit += profit;

            self.branch(depth + 1);

            self.profit -= profit;
            self.stack.pop();
        }

        self.branch(depth + 1);
    }
}

impl SequencingStrategy for BranchAndBound {
    fn id(&self) -> StrategyId {
        StrategyId::BranchAndBound
    }

    fn solve(&self, jobs: &[Job]) -> SchedulingResult {
        let slot_count = usable_slots(jobs);

        let mut order: Vec<usize> = (0..jobs.len()).collect();
        order.sort_by_key(|&i| jobs[i].deadline());

        let mut remaining = vec![0; order.len() + 1];
        for depth in (0..order.len()).rev() {
            remaining[depth] = remaining[depth + 1] + jobs[order[depth]].profit();
        }

        let mut search = SubsetSearch {
            jobs,
            order,
            remaining,
            slot_count,
            profit_bound: self.profit_bound,
            stack: Vec::with_capacity(slot_count),
            profit: 0,
            best: Incumbent::default(),
            nodes: 0,
            pruned: 0,
        };
        search.branch(0);
        debug!(
            nodes = search.nodes,
            pruned = search.pruned,
            best = search.best.profit,
            "branch and bound done"
        );

        let mut result = SchedulingResult::new(self.id(), slot_count);
        result.record_consecutive(search.best.jobs.iter().map(|&i| &jobs[i]));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::{make_jobs, textbook};

    #[test]
    fn test_backtracking_textbook() {
        let registry = textbook();
        let result = Backtracking.solve(registry.jobs());
        assert_eq!(result.total_profit, 142);

        // First maximal permutation in input order: A in slot 1, C in slot 2.
        assert_eq!(result.selected_ids(), vec!["A", "C", "E"]);
        assert_eq!(result.slot_of("A"), Some(1));
    }

    #[test]
    fn test_backtracking_first_found_wins_ties() {
        let jobs = make_jobs(&[("a", 1, 10), ("b", 1, 10)]);
        let result = Backtracking.solve(&jobs);
        assert_eq!(result.selected_ids(), vec!["a"]);
    }

    #[test]
    fn test_backtracking_deadline_blocks_late_slots() {
        let jobs = make_jobs(&[("early", 1, 5), ("late", 2, 1), ("tight", 1, 7)]);
        let result = Backtracking.solve(&jobs);
        assert_eq!(result.total_profit, 8);
        assert_eq!(result.slot_of("tight"), Some(1));
        assert_eq!(result.slot_of("late"), Some(2));
    }

    #[test]
    fn test_branch_and_bound_textbook() {
        let registry = textbook();
        let result = BranchAndBound::new().solve(registry.jobs());
        assert_eq!(result.total_profit, 142);
        assert_eq!(result.selected_ids(), vec!["A", "C", "E"]);
    }

    #[test]
    fn test_branch_and_bound_bound_does_not_change_result() {
        let jobs = make_jobs(&[
            ("a", 3, 12),
            ("b", 1, 30),
            ("c", 2, 7),
            ("d", 3, 12),
            ("e", 2, 40),
            ("f", 4, 0),
            ("g", 1, 30),
        ]);
        let bounded = BranchAndBound::new().solve(&jobs);
        let unbounded = BranchAndBound::new().with_profit_bound(false).solve(&jobs);
        assert_eq!(bounded, unbounded);
        assert_eq!(bounded.total_profit, 82);
    }

    #[test]
    fn test_zero_profit_jobs_not_selected() {
        let jobs = make_jobs(&[("z1", 1, 0), ("z2", 2, 0)]);
        assert!(Backtracking.solve(&jobs).is_empty());
        assert!(BranchAndBound::new().solve(&jobs).is_empty());
    }
}
