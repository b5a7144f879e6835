//! Simulation domain models.
//!
//! Provides the input type ([`Process`]) and the result types produced by
//! every simulator ([`ExecutionInterval`], [`ProcessMetrics`],
//! [`Aggregates`], [`RunResult`]). Pure data: no scheduling behavior.

mod interval;
mod process;
mod result;

pub use interval::ExecutionInterval;
pub use process::{total_burst, Process};
pub use result::{Aggregates, ProcessMetrics, RunResult};
