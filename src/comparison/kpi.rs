//! Sequencing quality metrics (KPIs).
//!
//! Summarizes a scheduling result against the job set it was computed
//! from, for tables and charts in a presentation layer.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slot Utilization | Scheduled jobs / max deadline |
//! | Profit Capture | Collected profit / profit of all jobs |
//! | Last Used Slot | Latest occupied slot |

use serde::Serialize;

use crate::models::{JobRegistry, Profit, SchedulingResult};

/// Result performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencingKpi {
    /// Profit collected.
    pub total_profit: Profit,
    /// Jobs scheduled.
    pub scheduled_count: usize,
    /// Jobs left out.
    pub unscheduled_count: usize,
    /// Fraction of slots in use (0.0..1.0).
    pub slot_utilization: f64,
    /// Fraction of all available profit collected (0.0..1.0).
    pub profit_capture: f64,
    /// Latest occupied slot, `0` if none.
    pub last_used_slot: usize,
}

impl SequencingKpi {
    /// Computes KPIs for `result` over `registry`.
    pub fn calculate(result: &SchedulingResult, registry: &JobRegistry) -> Self {
        let scheduled_count = result.len();
        let slots = registry.max_deadline();
        let available = registry.total_profit();

        let slot_utilization = if slots == 0 {
            0.0
        } else {
            scheduled_count as f64 / slots as f64
        };

        let profit_capture = if available == 0 {
            1.0
        } else {
            result.total_profit as f64 / available as f64
        };

        Self {
            total_profit: result.total_profit,
            scheduled_count,
            unscheduled_count: registry.len().saturating_sub(scheduled_count),
            slot_utilization,
            profit_capture,
            last_used_slot: result.last_used_slot(),
        }
    }

    /// Whether the result meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_capture: f64, min_utilization: f64) -> bool {
        self.profit_capture >= min_capture && self.slot_utilization >= min_utilization
    }
}
