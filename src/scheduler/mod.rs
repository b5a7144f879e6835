//! CPU scheduling simulators and metrics.
//!
//! Each simulator turns a process list into an ordered sequence of
//! execution intervals, then hands the timeline to [`metrics::compute`].
//!
//! # Algorithms
//!
//! | Simulator | Policy | Preemptive |
//! |-----------|--------|------------|
//! | [`Fcfs`] | Arrival order, ties by name | No |
//! | [`Sjf`] | Shortest burst among arrived | No |
//! | [`Srtf`] | Shortest remaining time, re-evaluated at arrivals | Yes |
//! | [`RoundRobin`] | FIFO queue, fixed quantum | Yes |
//!
//! Every simulator validates its input before emitting any interval and
//! owns all of its state (clock, remaining-time table, ready queue) for
//! the duration of one call.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod fcfs;
pub mod metrics;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::{simulate_fcfs, Fcfs};
pub use round_robin::{simulate_round_robin, simulate_rr_q3, simulate_rr_q6, RoundRobin};
pub use sjf::{simulate_sjf, Sjf};
pub use srtf::{simulate_srtf, Srtf};

use std::fmt::Debug;

use log::debug;

use crate::models::{ExecutionInterval, Process, RunResult};
use crate::validation::ValidationError;

/// Outcome of a simulator call: a complete run or every validation problem.
pub type SimulationResult = Result<RunResult, Vec<ValidationError>>;

/// A CPU scheduling discipline.
pub trait Simulator: Send + Sync + Debug {
    /// Algorithm label used in results (e.g. "FCFS").
    fn name(&self) -> String;

    /// Simulates the discipline over `processes`.
    fn simulate(&self, processes: &[Process]) -> SimulationResult;
}

/// Builds the run result from a finished timeline.
fn finish(
    algorithm: impl Into<String>,
    processes: &[Process],
    intervals: Vec<ExecutionInterval>,
) -> RunResult {
    let algorithm = algorithm.into();
    debug_assert_timeline(processes, &intervals);

    let (per_process, aggregates) = metrics::compute(processes, &intervals);
    debug!(
        "{algorithm}: {} processes, {} intervals, {} context switches, makespan {}",
        processes.len(),
        intervals.len(),
        aggregates.context_switches,
        aggregates.makespan
    );
    RunResult::new(algorithm, per_process, intervals, aggregates)
}

/// Checks the engine invariants of a completed timeline (debug builds only).
fn debug_assert_timeline(processes: &[Process], intervals: &[ExecutionInterval]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for p in processes {
        let own: Vec<&ExecutionInterval> =
            intervals.iter().filter(|i| i.process == p.name).collect();
        debug_assert!(!own.is_empty(), "process '{}' was never dispatched", p.name);
        for i in &own {
            debug_assert!(
                i.start >= p.arrival,
                "process '{}' dispatched at {} before arrival {}",
                p.name,
                i.start,
                p.arrival
            );
            debug_assert!(i.end > i.start, "empty interval for '{}'", p.name);
        }
    }

    for (idx, a) in intervals.iter().enumerate() {
        for b in &intervals[idx + 1..] {
            debug_assert!(
                !a.overlaps(b),
                "intervals {a:?} and {b:?} overlap"
            );
        }
    }
}
