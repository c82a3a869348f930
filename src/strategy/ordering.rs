//! Greedy-family strategies.
//!
//! Each strategy fixes an order over the jobs, then places them one at a
//! time into the latest free slot at or before their deadline. Jobs that
//! find no free slot are skipped. Only the order differs:
//!
//! | Strategy | Order | Ties |
//! |----------|-------|------|
//! | Greedy | profit descending | input order |
//! | Priority-Queue | heap pop, profit descending | smaller ID, then input order |
//! | NDF | deadline ascending | input order |
//! | SPT | profit ascending | input order |
//!
//! Greedy by profit is optimal for unit-time jobs (the feasible sets form a
//! matroid). The other orders are kept for comparison and may fall short.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use super::{SequencingStrategy, StrategyId};
use crate::models::{usable_slots, Job, Profit, SchedulingResult};
use crate::slots::AssignerKind;

/// Places `jobs[i]` for each `i` in `order`, stopping once every slot is taken.
fn place_in_order(
    strategy: StrategyId,
    jobs: &[Job],
    order: impl IntoIterator<Item = usize>,
    assigner: AssignerKind,
) -> SchedulingResult {
    let slot_count = usable_slots(jobs);
    let mut result = SchedulingResult::new(strategy, slot_count);
    let mut line = assigner.create(slot_count);

    for index in order {
        if line.is_full() {
            break;
        }
        let job = &jobs[index];
        match line.assign(job) {
            Some(slot) => {
                trace!(strategy = strategy.name(), job = job.id(), slot, "placed");
                result.record(job, slot);
            }
            None => trace!(strategy = strategy.name(), job = job.id(), "unschedulable"),
        }
    }

    result
}

/// Indices of `jobs` in input order, stably sorted by `key`.
fn stable_order<K: Ord>(jobs: &[Job], key: impl Fn(&Job) -> K) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..jobs.len()).collect();
    indices.sort_by_key(|&i| key(&jobs[i]));
    indices
}

/// Profit-descending greedy.
///
/// # Example
/// ```
/// use jobseq::models::{JobInput, JobRegistry};
/// use jobseq::slots::AssignerKind;
/// use jobseq::strategy::{Greedy, SequencingStrategy};
///
/// let registry = JobRegistry::build(vec![
///     JobInput::new("A", 1, 10),
///     JobInput::new("B", 1, 30),
/// ])
/// .unwrap();
///
/// let greedy = Greedy::new().with_assigner(AssignerKind::DisjointSet);
/// let result = greedy.solve(registry.jobs());
/// assert_eq!(result.selected_ids(), vec!["B"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy {
    assigner: AssignerKind,
}

impl Greedy {
    /// Creates the strategy with the linear slot assigner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot assigner.
    pub fn with_assigner(mut self, assigner: AssignerKind) -> Self {
        self.assigner = assigner;
        self
    }
}

impl SequencingStrategy for Greedy {
    fn id(&self) -> StrategyId {
        StrategyId::Greedy
    }

    fn solve(&self, jobs: &[Job]) -> SchedulingResult {
        let order = stable_order(jobs, |job| Reverse(job.profit()));
        place_in_order(self.id(), jobs, order, self.assigner)
    }
}

/// Greedy driven by a max-profit binary heap.
///
/// Equal profits pop by ascending ID; IDs are unique within a registry,
/// with input position as the last resort for raw slices.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityQueue {
    assigner: AssignerKind,
}

impl PriorityQueue {
    /// Creates the strategy with the linear slot assigner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot assigner.
    pub fn with_assigner(mut self, assigner: AssignerKind) -> Self {
        self.assigner = assigner;
        self
    }
}

impl SequencingStrategy for PriorityQueue {
    fn id(&self) -> StrategyId {
        StrategyId::PriorityQueue
    }

    fn solve(&self, jobs: &[Job]) -> SchedulingResult {
        let mut heap: BinaryHeap<(Profit, Reverse<&str>, Reverse<usize>)> = jobs
            .iter()
            .enumerate()
            .map(|(i, job)| (job.profit(), Reverse(job.id()), Reverse(i)))
            .collect();

        let order = std::iter::from_fn(move || heap.pop().map(|(_, _, Reverse(i))| i));
        place_in_order(self.id(), jobs, order, self.assigner)
    }
}

/// Deadline-ascending greedy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestDeadlineFirst {
    assigner: AssignerKind,
}

impl NearestDeadlineFirst {
    /// Creates the strategy with the linear slot assigner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot assigner.
    pub fn with_assigner(mut self, assigner: AssignerKind) -> Self {
        self.assigner = assigner;
        self
    }
}

impl SequencingStrategy for NearestDeadlineFirst {
    fn id(&self) -> StrategyId {
        StrategyId::NearestDeadlineFirst
    }

    fn solve(&self, jobs: &[Job]) -> SchedulingResult {
        let order = stable_order(jobs, Job::deadline);
        place_in_order(self.id(), jobs, order, self.assigner)
    }
}

/// Profit-ascending greedy.
///
/// The name is historical: jobs are unit-time, so "processing time" is read
/// as profit and the cheapest jobs are placed first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestProcessingTime {
    assigner: AssignerKind,
}

impl ShortestProcessingTime {
    /// Creates the strategy with the linear slot assigner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot assigner.
    pub fn with_assigner(mut self, assigner: AssignerKind) -> Self {
        self.assigner = assigner;
        self
    }
}

impl SequencingStrategy for ShortestProcessingTime {
    fn id(&self) -> StrategyId {
        StrategyId::ShortestProcessingTime
    }

    fn solve(&self, jobs: &[Job]) -> SchedulingResult {
        let order = stable_order(jobs, Job::profit);
        place_in_order(self.id(), jobs, order, self.assigner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::{make_jobs, textbook};

    #[test]
    fn test_greedy_textbook() {
        let registry = textbook();
        let result = Greedy::new().solve(registry.jobs());

        // Order A, C, D, B, E: D and B find no slot.
        assert_eq!(result.total_profit, 142);
        assert_eq!(result.selected_ids(), vec!["A", "C", "E"]);
        assert_eq!(
            result.timeline,
            vec![Some("C".into()), Some("A".into()), Some("E".into())]
        );
    }

    #[test]
    fn test_greedy_stable_ties() {
        let jobs = make_jobs(&[("first", 1, 10), ("second", 1, 10)]);
        let result = Greedy::new().solve(&jobs);
        assert_eq!(result.selected_ids(), vec!["first"]);
    }

    #[test]
    fn test_greedy_disjoint_assigner_matches_linear() {
        let jobs = make_jobs(&[
            ("a", 4, 20),
            ("b", 1, 10),
            ("c", 1, 40),
            ("d", 1, 30),
            ("e", 3, 25),
            ("f", 4, 5),
        ]);
        let linear = Greedy::new().solve(&jobs);
        let disjoint = Greedy::new()
            .with_assigner(AssignerKind::DisjointSet)
            .solve(&jobs);
        assert_eq!(linear, disjoint);
        assert_eq!(linear.total_profit, 90);
    }

    #[test]
    fn test_priority_queue_textbook() {
        let registry = textbook();
        let result = PriorityQueue::new().solve(registry.jobs());
        assert_eq!(result.total_profit, 142);
        assert_eq!(result.selected_ids(), vec!["A", "C", "E"]);
    }

    #[test]
    fn test_priority_queue_ties_by_id() {
        let jobs = make_jobs(&[("zeta", 1, 10), ("alpha", 1, 10)]);
        let result = PriorityQueue::new().solve(&jobs);
        assert_eq!(result.selected_ids(), vec!["alpha"]);
    }

    #[test]
    fn test_ndf_textbook() {
        let registry = textbook();
        let result = NearestDeadlineFirst::new().solve(registry.jobs());

        // Order B, D, A, C, E: B takes slot 1, D is dropped, A takes slot 2.
        assert_eq!(result.selected_ids(), vec!["B", "A", "E"]);
        assert_eq!(result.total_profit, 134);
    }

    #[test]
    fn test_spt_textbook() {
        let registry = textbook();
        let result = ShortestProcessingTime::new().solve(registry.jobs());

        // Order E, B, D, C, A: E slot 3, B slot 1, C slot 2.
        assert_eq!(result.selected_ids(), vec!["E", "B", "C"]);
        assert_eq!(result.total_profit, 61);
    }

    #[test]
    fn test_input_not_reordered() {
        let registry = textbook();
        let before: Vec<_> = registry.jobs().iter().map(Job::id).collect();
        let _ = Greedy::new().solve(registry.jobs());
        let _ = ShortestProcessingTime::new().solve(registry.jobs());
        let after: Vec<_> = registry.jobs().iter().map(Job::id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_stops_when_full() {
        let jobs = make_jobs(&[("a", 1, 9), ("b", 1, 8), ("c", 1, 7)]);
        let result = Greedy::new().solve(&jobs);
        assert_eq!(result.selected_ids(), vec!["a"]);
        assert_eq!(result.timeline, vec![Some("a".into())]);
    }
}
