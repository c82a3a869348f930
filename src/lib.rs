//! Unit-time job sequencing with deadlines.
//!
//! Given jobs that each take one time slot, carry a deadline and a profit,
//! choose which jobs to run in which slots so that total profit is
//! maximized. Several classic strategies are provided side by side, from
//! O(n log n) greedy passes to exhaustive search, together with a
//! comparator that runs them over the same job set.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `JobInput`, `Job`, `JobRegistry`, `SchedulingResult`
//! - **`validation`**: Input integrity checks (empty list, duplicate IDs, bad deadlines/profits)
//! - **`slots`**: Time slot lines and latest-free-slot placement
//! - **`strategy`**: Greedy, heap, DP and search strategies behind one trait
//! - **`comparison`**: Multi-strategy comparison table and result KPIs
//! - **`instance`**: Seeded random instances for benchmarks and cross-checks
//!
//! # Example
//!
//! ```
//! use jobseq::comparison::Comparator;
//! use jobseq::models::{JobInput, JobRegistry};
//! use jobseq::strategy::{solve, StrategyId};
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
//! let greedy = solve(&registry, StrategyId::Greedy);
//! assert_eq!(greedy.total_profit, 142);
//!
//! let table = Comparator::all().compare(&registry);
//! assert_eq!(table.len(), StrategyId::ALL.len());
//! ```
//!
//! # Architecture
//!
//! The crate is a pure computation core. Collecting job records, rendering
//! results and persisting job lists belong to the caller; data types derive
//! serde traits so they can cross that boundary as JSON.
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms"
//! - Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4

pub mod comparison;
pub mod instance;
pub mod models;
pub mod slots;
pub mod strategy;
pub mod validation;
