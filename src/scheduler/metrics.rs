//! Per-process metrics and run aggregates.
//!
//! Derives timing metrics from an execution timeline and its input
//! processes. Shared by every simulator.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Latest end among the process's intervals |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Context switches | Adjacent intervals (by start) owned by different processes |
//! | Makespan | Latest interval end |
//! | CPU utilization | Busy time / makespan |

use std::collections::HashMap;

use log::warn;

use crate::models::{Aggregates, ExecutionInterval, Process, ProcessMetrics};

/// Computes per-process metrics and aggregates.
///
/// Intervals may be given in any order; they are sorted by `(start, end)`
/// before the walk. Output metrics follow the order of `processes`.
///
/// A process with no interval gets completion and first start 0. This
/// only happens for malformed timelines and is logged.
///
/// # Example
/// ```
/// use cpu_sched_sim::models::{ExecutionInterval, Process};
/// use cpu_sched_sim::scheduler::metrics;
///
/// let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 1, 2)];
/// let intervals = vec![
///     ExecutionInterval::new("P1", 0, 3),
///     ExecutionInterval::new("P2", 3, 5),
/// ];
/// let (per_process, aggregates) = metrics::compute(&processes, &intervals);
/// assert_eq!(per_process[1].waiting, 2);
/// assert_eq!(aggregates.context_switches, 1);
/// ```
pub fn compute(
    processes: &[Process],
    intervals: &[ExecutionInterval],
) -> (Vec<ProcessMetrics>, Aggregates) {
    if processes.is_empty() {
        return (Vec::new(), Aggregates::default());
    }

    let mut sorted: Vec<&ExecutionInterval> = intervals.iter().collect();
    sorted.sort_by_key(|i| (i.start, i.end));

    let mut first_start: HashMap<&str, i64> = HashMap::new();
    let mut completion: HashMap<&str, i64> = HashMap::new();
    let mut context_switches: usize = 0;
    let mut busy: i64 = 0;
    let mut previous: Option<&str> = None;

    for interval in &sorted {
        let name = interval.process.as_str();
        first_start.entry(name).or_insert(interval.start);
        let end = completion.entry(name).or_insert(interval.end);
        *end = (*end).max(interval.end);
        busy += interval.duration();

        if previous.is_some_and(|prev| prev != name) {
            context_switches += 1;
        }
        previous = Some(name);
    }

    let mut total_turnaround = 0.0;
    let mut total_waiting = 0.0;
    let mut total_response = 0.0;

    let per_process: Vec<ProcessMetrics> = processes
        .iter()
        .map(|p| {
            let name = p.name.as_str();
            let (done, started) = match (completion.get(name), first_start.get(name)) {
                (Some(&done), Some(&started)) => (done, started),
                _ => {
                    warn!("process '{name}' has no execution interval; defaulting to t=0");
                    (0, 0)
                }
            };

            let turnaround = done - p.arrival;
            let waiting = turnaround - p.burst;
            let response = started - p.arrival;
            total_turnaround += turnaround as f64;
            total_waiting += waiting as f64;
            total_response += response as f64;

            ProcessMetrics {
                name: p.name.clone(),
                arrival: p.arrival,
                burst: p.burst,
                completion: done,
                turnaround,
                waiting,
                response,
            }
        })
        .collect();

    let count = processes.len() as f64;
    let makespan = sorted.iter().map(|i| i.end).max().unwrap_or(0);
    let cpu_utilization = if makespan > 0 {
        busy as f64 / makespan as f64
    } else {
        0.0
    };

    let aggregates = Aggregates {
        avg_turnaround: total_turnaround / count,
        avg_waiting: total_waiting / count,
        avg_response: total_response / count,
        context_switches,
        makespan,
        cpu_utilization,
    };

    (per_process, aggregates)
}
