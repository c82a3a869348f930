//! Side-by-side strategy comparison.
//!
//! Every strategy runs on its own against the same registry. Strategies
//! never reorder the registry's jobs, so a run cannot influence the next.

use serde::Serialize;
use tracing::{debug, info};

use crate::models::{JobInput, JobRegistry, Profit, SchedulingResult};
use crate::strategy::StrategyId;
use crate::validation::ValidationError;

/// One strategy's line in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Strategy that was run.
    pub strategy: StrategyId,
    /// Profit it collected.
    pub total_profit: Profit,
    /// Number of jobs it scheduled.
    pub selected: usize,
    /// Asymptotic time complexity class.
    pub complexity: &'static str,
    /// Whether the strategy is exact.
    pub exact: bool,
}

/// Results of several strategies over one job set, in request order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
    results: Vec<SchedulingResult>,
}

impl ComparisonTable {
    fn push(&mut self, result: SchedulingResult) {
        let strategy = result.strategy;
        self.rows.push(ComparisonRow {
            strategy,
            total_profit: result.total_profit,
            selected: result.len(),
            complexity: strategy.complexity(),
            exact: strategy.is_exact(),
        });
        self.results.push(result);
    }

    /// Rows in request order.
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Full results, parallel to [`rows`](Self::rows).
    pub fn results(&self) -> &[SchedulingResult] {
        &self.results
    }

    /// First row for `strategy`.
    pub fn row(&self, strategy: StrategyId) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.strategy == strategy)
    }

    /// First result for `strategy`.
    pub fn result(&self, strategy: StrategyId) -> Option<&SchedulingResult> {
        self.results.iter().find(|result| result.strategy == strategy)
    }

    /// First row with the highest profit.
    pub fn best(&self) -> Option<&ComparisonRow> {
        self.rows.iter().fold(None, |best: Option<&ComparisonRow>, row| match best {
            Some(b) if b.total_profit >= row.total_profit => Some(b),
            _ => Some(row),
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no strategy was run.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A reusable set of strategies to compare.
///
/// # Example
/// ```
/// use jobseq::comparison::Comparator;
/// use jobseq::models::{JobInput, JobRegistry};
/// use jobseq::strategy::StrategyId;
///
/// let registry = JobRegistry::build(vec![
///     JobInput::new("A", 2, 100),
///     JobInput::new("B", 1, 19),
///     JobInput::new("C", 2, 27),
/// ])
/// .unwrap();
///
/// let table = Comparator::new()
///     .with_strategy(StrategyId::ShortestProcessingTime)
///     .with_strategy(StrategyId::TwoDimensionalDp)
///     .compare(&registry);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.best().unwrap().strategy, StrategyId::TwoDimensionalDp);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    strategies: Vec<StrategyId>,
}

impl Comparator {
    /// Creates a comparator with no strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a comparator over every built-in strategy.
    pub fn all() -> Self {
        Self::new().with_strategies(StrategyId::ALL)
    }

    /// Appends a strategy.
    pub fn with_strategy(mut self, strategy: StrategyId) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Appends several strategies.
    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = StrategyId>) -> Self {
        self.strategies.extend(strategies);
        self
    }

    /// Strategies in run order.
    pub fn strategies(&self) -> &[StrategyId] {
        &self.strategies
    }

    /// Runs every strategy against `registry`.
    pub fn compare(&self, registry: &JobRegistry) -> ComparisonTable {
        compare(registry, &self.strategies)
    }

    /// Builds a registry from raw records, then compares.
    pub fn compare_inputs(
        &self,
        inputs: impl IntoIterator<Item = JobInput>,
    ) -> Result<ComparisonTable, ValidationError> {
        compare_inputs(inputs, &self.strategies)
    }
}

/// Runs each strategy against `registry`, one row per strategy in order.
pub fn compare(registry: &JobRegistry, strategies: &[StrategyId]) -> ComparisonTable {
    let mut table = ComparisonTable::default();
    for &strategy in strategies {
        table.push(strategy.solve(registry));
    }

    if let Some(best) = table.best() {
        info!(
            strategies = table.len(),
            jobs = registry.len(),
            best = best.strategy.name(),
            best_profit = best.total_profit,
            "comparison finished"
        );
    }
    table
}

/// Validates raw records and compares.
///
/// The first validation error is returned as-is and no strategy runs.
pub fn compare_inputs(
    inputs: impl IntoIterator<Item = JobInput>,
    strategies: &[StrategyId],
) -> Result<ComparisonTable, ValidationError> {
    let registry = JobRegistry::build(inputs).inspect_err(|err| {
        debug!(kind = ?err.kind, "comparison rejected: {err}");
    })?;
    Ok(compare(&registry, strategies))
}
