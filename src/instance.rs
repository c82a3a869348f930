//! Random problem instances.
//!
//! Generates job lists for benchmarking and for cross-checking strategies.
//! Generated records always pass validation.
//!
//! # Example
//! ```
//! use jobseq::instance::{generate, InstanceConfig};
//! use jobseq::models::JobRegistry;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let config = InstanceConfig::new(6).with_max_deadline(3).with_max_profit(50);
//! let registry = JobRegistry::build(generate(&config, &mut rng)).unwrap();
//! assert_eq!(registry.len(), 6);
//! assert!(registry.max_deadline() <= 3);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{JobInput, Profit};

/// Shape of a generated instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Number of jobs (at least 1).
    pub job_count: usize,
    /// Deadlines are drawn from `1..=max_deadline` (at least 1).
    pub max_deadline: i64,
    /// Profits are drawn from `0..=max_profit`.
    pub max_profit: i64,
    /// Prefix for generated IDs (`{prefix}1`, `{prefix}2`, ...).
    pub id_prefix: String,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            job_count: 8,
            max_deadline: 4,
            max_profit: 100,
            id_prefix: "J".to_string(),
        }
    }
}

impl InstanceConfig {
    /// Creates a config for `job_count` jobs with default ranges.
    pub fn new(job_count: usize) -> Self {
        Self {
            job_count: job_count.max(1),
            ..Self::default()
        }
    }

    /// Sets the largest deadline.
    pub fn with_max_deadline(mut self, max_deadline: i64) -> Self {
        self.max_deadline = max_deadline.max(1);
        self
    }

    /// Sets the largest profit.
    pub fn with_max_profit(mut self, max_profit: i64) -> Self {
        self.max_profit = max_profit.max(0);
        self
    }

    /// Sets the ID prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}

/// Draws a job list from `config`.
///
/// Out-of-range fields (set directly rather than through the builder) are
/// clamped, so the output is always a valid, non-empty job list. The profit
/// ceiling is also lowered until `job_count * max_profit` fits in [`Profit`].
pub fn generate<R: Rng>(config: &InstanceConfig, rng: &mut R) -> Vec<JobInput> {
    let job_count = config.job_count.max(1);
    let max_deadline = config.max_deadline.max(1);
    let total_ceiling = Profit::MAX / job_count as Profit;
    let max_profit = config
        .max_profit
        .clamp(0, i64::try_from(total_ceiling).unwrap_or(i64::MAX));
    let prefix = if config.id_prefix.is_empty() {
        "J"
    } else {
        config.id_prefix.as_str()
    };

    (1..=job_count)
        .map(|k| {
            JobInput::new(
                format!("{prefix}{k}"),
                rng.random_range(1..=max_deadline),
                rng.random_range(0..=max_profit),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_jobs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = InstanceConfig::new(50)
            .with_max_deadline(5)
            .with_max_profit(20)
            .with_id_prefix("T");
        let jobs = generate(&config, &mut rng);

        assert_eq!(jobs.len(), 50);
        assert_eq!(jobs[0].id, "T1");
        assert_eq!(jobs[49].id, "T50");
        assert!(jobs.iter().all(|j| (1..=5).contains(&j.deadline)));
        assert!(jobs.iter().all(|j| (0..=20).contains(&j.profit)));
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_generate_deterministic_for_seed() {
        let config = InstanceConfig::default();
        let a = generate(&config, &mut StdRng::seed_from_u64(1));
        let b = generate(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_clamps_bad_config() {
        let config = InstanceConfig {
            job_count: 0,
            max_deadline: -3,
            max_profit: -1,
            id_prefix: String::new(),
        };
        let jobs = generate(&config, &mut StdRng::seed_from_u64(9));
        assert_eq!(jobs, vec![JobInput::new("J1", 1, 0)]);
    }

    #[test]
    fn test_generate_keeps_profit_total_in_range() {
        let config = InstanceConfig::new(5).with_max_profit(i64::MAX);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let jobs = generate(&config, &mut rng);
            assert!(jobs.iter().all(|j| j.profit <= (u64::MAX / 5) as i64));
            assert!(validate_jobs(&jobs).is_ok());
        }
    }
}
