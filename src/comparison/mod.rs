//! Strategy comparison and result KPIs.
//!
//! Runs several strategies over the same registry and collects their
//! results into a table, plus per-result quality metrics.
//!
//! # KPI
//!
//! `SequencingKpi` computes slot utilization, profit capture and the last
//! occupied slot of a result.

mod compare;
mod kpi;

pub use compare::{compare, compare_inputs, Comparator, ComparisonRow, ComparisonTable};
pub use kpi::SequencingKpi;
