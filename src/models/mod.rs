//! Job sequencing domain models.
//!
//! Provides the data types for representing a unit-time job sequencing
//! problem and its solutions.
//!
//! | Type | Role |
//! |------|------|
//! | `JobInput` | Raw, unchecked record from an input form |
//! | `Job` | Validated, immutable job |
//! | `JobRegistry` | Validated job set for one solve request |
//! | `SchedulingResult` | One strategy's selection and slot timeline |

mod job;
mod registry;
mod result;

pub use job::{max_deadline, usable_slots, Job, JobInput, Profit};
pub use registry::JobRegistry;
pub use result::SchedulingResult;
