//! Job sequencing strategies.
//!
//! Every strategy takes a job slice and returns a [`SchedulingResult`].
//! They differ in how they order or search the jobs:
//!
//! - **Ordering** (greedy family): Greedy, Priority-Queue,
//!   Nearest-Deadline-First, Shortest-Processing-Time. Each places jobs
//!   one by one through a [`SlotAssigner`](crate::slots::SlotAssigner).
//! - **Dynamic programming**: 1-D Slot DP (heuristic), Two-Dimensional DP
//!   (exact).
//! - **Search**: Backtracking and Branch-and-Bound (both exact).
//!
//! An empty job slice always yields profit 0 and an empty selection.
//!
//! # Usage
//!
//! ```
//! use jobseq::models::{JobInput, JobRegistry};
//! use jobseq::strategy::StrategyId;
//!
//! let registry = JobRegistry::build(vec![
//!     JobInput::new("A", 2, 100),
//!     JobInput::new("B", 1, 19),
//!     JobInput::new("C", 2, 27),
//!     JobInput::new("D", 1, 25),
//!     JobInput::new("E", 3, 15),
//! ])
//! .unwrap();
//!
//! let result = StrategyId::BranchAndBound.solve(&registry);
//! assert_eq!(result.total_profit, 142);
//! ```
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4, 5, 7, 8
//! - Lawler & Moore (1969), "A Functional Equation and its Application to
//!   Resource Allocation and Sequencing Problems"

mod dp;
mod ordering;
mod search;

pub use dp::{SlotDp, TwoDimensionalDp};
pub use ordering::{Greedy, NearestDeadlineFirst, PriorityQueue, ShortestProcessingTime};
pub use search::{Backtracking, BranchAndBound};

use std::fmt::{self, Debug};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Job, JobRegistry, SchedulingResult};

/// A job sequencing algorithm.
///
/// Implementations never mutate the input slice; any reordering happens on
/// a private working copy, so repeated or interleaved runs over the same
/// jobs are independent.
pub trait SequencingStrategy: Send + Sync + Debug {
    /// Identity of this strategy.
    fn id(&self) -> StrategyId;

    /// Schedules `jobs` and returns the selection.
    fn solve(&self, jobs: &[Job]) -> SchedulingResult;

    /// Short name (e.g., "greedy").
    fn name(&self) -> &'static str {
        self.id().name()
    }
}

/// Identifies one of the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyId {
    /// Profit-descending greedy placement.
    Greedy,
    /// Max-profit heap with greedy placement.
    PriorityQueue,
    /// Deadline-ascending greedy placement.
    NearestDeadlineFirst,
    /// Profit-ascending greedy placement.
    ShortestProcessingTime,
    /// Single-array knapsack-style slot table.
    SlotDp,
    /// Items x slot-capacity table.
    TwoDimensionalDp,
    /// Exhaustive permutation search.
    Backtracking,
    /// Include/skip depth-first search with bounds.
    BranchAndBound,
}

impl StrategyId {
    /// All strategies, heuristics first.
    pub const ALL: [StrategyId; 8] = [
        StrategyId::Greedy,
        StrategyId::PriorityQueue,
        StrategyId::NearestDeadlineFirst,
        StrategyId::ShortestProcessingTime,
        StrategyId::SlotDp,
        StrategyId::TwoDimensionalDp,
        StrategyId::Backtracking,
        StrategyId::BranchAndBound,
    ];

    /// Strategies guaranteed to return the maximum achievable profit.
    pub const EXACT: [StrategyId; 3] = [
        StrategyId::TwoDimensionalDp,
        StrategyId::Backtracking,
        StrategyId::BranchAndBound,
    ];

    /// Kebab-case name, as used by `Display`, `FromStr` and serde.
    pub fn name(self) -> &'static str {
        match self {
            StrategyId::Greedy => "greedy",
            StrategyId::PriorityQueue => "priority-queue",
            StrategyId::NearestDeadlineFirst => "nearest-deadline-first",
            StrategyId::ShortestProcessingTime => "shortest-processing-time",
            StrategyId::SlotDp => "slot-dp",
            StrategyId::TwoDimensionalDp => "two-dimensional-dp",
            StrategyId::Backtracking => "backtracking",
            StrategyId::BranchAndBound => "branch-and-bound",
        }
    }

    /// Human-readable label.
    pub fn description(self) -> &'static str {
        match self {
            StrategyId::Greedy => "Greedy",
            StrategyId::PriorityQueue => "Priority Queue",
            StrategyId::NearestDeadlineFirst => "Nearest Deadline First (NDF)",
            StrategyId::ShortestProcessingTime => "Shortest Processing Time (SPT)",
            StrategyId::SlotDp => "Knapsack (1-D slot DP)",
            StrategyId::TwoDimensionalDp => "Dynamic Programming (2-D)",
            StrategyId::Backtracking => "Backtracking",
            StrategyId::BranchAndBound => "Branch and Bound",
        }
    }

    /// Asymptotic time complexity class (`n` jobs, `d` = max deadline).
    pub fn complexity(self) -> &'static str {
        match self {
            StrategyId::Greedy
            | StrategyId::PriorityQueue
            | StrategyId::NearestDeadlineFirst
            | StrategyId::ShortestProcessingTime => "O(n log n + n·d)",
            StrategyId::SlotDp | StrategyId::TwoDimensionalDp => "O(n·d)",
            StrategyId::Backtracking => "O(n!)",
            StrategyId::BranchAndBound => "O(2^n)",
        }
    }

    /// Whether the strategy always finds the maximum profit.
    pub fn is_exact(self) -> bool {
        StrategyId::EXACT.contains(&self)
    }

    /// Runs the strategy, in its default configuration, over a registry.
    pub fn solve(self, registry: &JobRegistry) -> SchedulingResult {
        self.solve_jobs(registry.jobs())
    }

    /// Runs the strategy, in its default configuration, over a job slice.
    pub fn solve_jobs(self, jobs: &[Job]) -> SchedulingResult {
        let result = match self {
            StrategyId::Greedy => Greedy::new().solve(jobs),
            StrategyId::PriorityQueue => PriorityQueue::new().solve(jobs),
            StrategyId::NearestDeadlineFirst => NearestDeadlineFirst::new().solve(jobs),
            StrategyId::ShortestProcessingTime => ShortestProcessingTime::new().solve(jobs),
            StrategyId::SlotDp => SlotDp.solve(jobs),
            StrategyId::TwoDimensionalDp => TwoDimensionalDp.solve(jobs),
            StrategyId::Backtracking => Backtracking.solve(jobs),
            StrategyId::BranchAndBound => BranchAndBound::new().solve(jobs),
        };

        debug!(
            strategy = self.name(),
            jobs = jobs.len(),
            selected = result.len(),
            total_profit = result.total_profit,
            "strategy finished"
        );

        result
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyId {
    type Err = UnknownStrategy;

    /// Parses a kebab-case name or a common short alias, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let id = match key.as_str() {
            "greedy" => StrategyId::Greedy,
            "priority-queue" | "pq" | "heap" => StrategyId::PriorityQueue,
            "nearest-deadline-first" | "ndf" => StrategyId::NearestDeadlineFirst,
            "shortest-processing-time" | "spt" => StrategyId::ShortestProcessingTime,
            "slot-dp" | "knapsack" => StrategyId::SlotDp,
            "two-dimensional-dp" | "dp" | "dynamic-programming" => StrategyId::TwoDimensionalDp,
            "backtracking" => StrategyId::Backtracking,
            "branch-and-bound" | "bnb" => StrategyId::BranchAndBound,
            _ => return Err(UnknownStrategy(s.to_string())),
        };
        Ok(id)
    }
}

/// Solves `registry` with one strategy.
pub fn solve(registry: &JobRegistry, strategy: StrategyId) -> SchedulingResult {
    strategy.solve(registry)
}


#[cfg(test)]
mod tests {
    use super::test_support::{make_jobs, textbook};
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for id in StrategyId::ALL {
            assert_eq!(id.name().parse::<StrategyId>(), Ok(id));
            assert_eq!(id.to_string(), id.name());
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("NDF".parse(), Ok(StrategyId::NearestDeadlineFirst));
        assert_eq!("spt".parse(), Ok(StrategyId::ShortestProcessingTime));
        assert_eq!("Branch and Bound".parse(), Ok(StrategyId::BranchAndBound));
        assert_eq!("slot_dp".parse(), Ok(StrategyId::SlotDp));
    }

    #[test]
    fn test_unknown_strategy() {
        let err = "simulated-annealing".parse::<StrategyId>().unwrap_err();
        assert_eq!(err, UnknownStrategy("simulated-annealing".into()));
        assert_eq!(err.to_string(), "Unknown strategy: simulated-annealing");
    }

    #[test]
    fn test_exact_flags() {
        let exact: Vec<_> = StrategyId::ALL.into_iter().filter(|s| s.is_exact()).collect();
        assert_eq!(exact, StrategyId::EXACT.to_vec());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&StrategyId::TwoDimensionalDp).unwrap();
        assert_eq!(json, "\"two-dimensional-dp\"");
        let back: StrategyId = serde_json::from_str("\"nearest-deadline-first\"").unwrap();
        assert_eq!(back, StrategyId::NearestDeadlineFirst);
    }

    #[test]
    fn test_textbook_instance() {
        let registry = textbook();
        for id in StrategyId::EXACT {
            assert_eq!(id.solve(&registry).total_profit, 142, "{id}");
        }
        assert_eq!(solve(&registry, StrategyId::Greedy).total_profit, 142);
    }

    #[test]
    fn test_single_job_every_strategy() {
        let jobs = make_jobs(&[("J1", 1, 5)]);
        for id in StrategyId::ALL {
            let result = id.solve_jobs(&jobs);
            assert_eq!(result.total_profit, 5, "{id}");
            assert_eq!(result.selected_ids(), vec!["J1"], "{id}");
            assert_eq!(result.strategy, id);
        }
    }

    #[test]
    fn test_two_jobs_same_slot() {
        let jobs = make_jobs(&[("high", 1, 8), ("low", 1, 3)]);
        for id in StrategyId::ALL {
            let result = id.solve_jobs(&jobs);
            if id == StrategyId::ShortestProcessingTime {
                // Profit-ascending order fills the only slot with the cheaper job.
                assert_eq!(result.total_profit, 3, "{id}");
            } else {
                assert_eq!(result.total_profit, 8, "{id}");
            }
            assert_eq!(result.len(), 1, "{id}");
        }
    }

    #[test]
    fn test_empty_slice_every_strategy() {
        for id in StrategyId::ALL {
            let result = id.solve_jobs(&[]);
            assert_eq!(result.total_profit, 0, "{id}");
            assert!(result.is_empty(), "{id}");
            assert!(result.timeline.is_empty(), "{id}");
        }
    }

    #[test]
    fn test_profit_total_at_type_limit_every_strategy() {
        // i64::MAX + i64::MAX + 1 == u64::MAX: the largest accepted total.
        let jobs = make_jobs(&[("a", 1, i64::MAX), ("b", 2, i64::MAX), ("c", 3, 1)]);
        for id in StrategyId::ALL {
            let result = id.solve_jobs(&jobs);
            assert_eq!(result.total_profit, u64::MAX, "{id}");
            assert_eq!(result.len(), 3, "{id}");
        }
    }

    #[test]
    fn test_far_deadline_every_strategy() {
        let jobs = make_jobs(&[("far", 1 << 40, 5)]);
        for id in StrategyId::ALL {
            let result = id.solve_jobs(&jobs);
            assert_eq!(result.total_profit, 5, "{id}");
            assert_eq!(result.timeline, vec![Some("far".to_string())], "{id}");
        }

        let jobs = make_jobs(&[("far", 1 << 40, 5), ("near", 1, 9), ("mid", 1 << 20, 2)]);
        for id in StrategyId::ALL {
            let result = id.solve_jobs(&jobs);
            assert_eq!(result.timeline.len(), 3, "{id}");
            if id.is_exact() {
                assert_eq!(result.total_profit, 16, "{id}");
            }
        }
    }

    #[test]
    fn test_properties_on_random_instances() {
        use crate::instance::{generate, InstanceConfig};
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        use std::collections::HashSet;

        let mut rng = StdRng::seed_from_u64(2024);
        for round in 0..60 {
            let config = InstanceConfig::new(1 + round % 7)
                .with_max_deadline(1 + (round % 4) as i64)
                .with_max_profit(if round % 5 == 0 { 3 } else { 60 });
            let registry = JobRegistry::build(generate(&config, &mut rng)).unwrap();

            let optimum = StrategyId::BranchAndBound.solve(&registry).total_profit;
            for id in StrategyId::ALL {
                let result = id.solve(&registry);

                let sum: u64 = result.selected_jobs.iter().map(Job::profit).sum();
                assert_eq!(result.total_profit, sum, "{id} round {round}");
                assert!(result.len() <= registry.max_deadline(), "{id} round {round}");
                assert_eq!(result.timeline.len(), registry.usable_slots(), "{id} round {round}");
                assert!(result.len() <= registry.len(), "{id} round {round}");

                let ids: HashSet<_> = result.selected_ids().into_iter().collect();
                assert_eq!(ids.len(), result.len(), "{id} round {round}");

                for job in &result.selected_jobs {
                    let slot = result.slot_of(job.id()).unwrap();
                    assert!(slot <= job.deadline(), "{id} round {round}");
                }
                assert_eq!(
                    result.timeline.iter().flatten().count(),
                    result.len(),
                    "{id} round {round}"
                );

                if id.is_exact() {
                    assert_eq!(result.total_profit, optimum, "{id} round {round}");
                } else {
                    assert!(result.total_profit <= optimum, "{id} round {round}");
                }

                // Greedy by profit is optimal for unit-time jobs.
                if id == StrategyId::Greedy {
                    assert_eq!(result.total_profit, optimum, "round {round}");
                }

                assert_eq!(id.solve(&registry), result, "{id} round {round}");
            }
        }
    }

    #[test]
    fn test_strategy_trait_names() {
        assert_eq!(Greedy::new().name(), "greedy");
        assert_eq!(BranchAndBound::new().name(), "branch-and-bound");
        assert_eq!(SlotDp.id(), StrategyId::SlotDp);
    }
}
