//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Sort processes by `(arrival, name)`.
//! 2. Walk a single clock from t=0; jump forward over idle gaps.
//! 3. Run each process to completion in sorted order.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use log::trace;

use super::{finish, SimulationResult, Simulator};
use crate::models::{ExecutionInterval, Process};
use crate::validation::validate_processes;

/// First-Come-First-Served simulator.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{Fcfs, Simulator};
///
/// let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 1, 2)];
/// let result = Fcfs.simulate(&processes).unwrap();
/// assert_eq!(result.intervals[1].start, 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Simulator for Fcfs {
    fn name(&self) -> String {
        "FCFS".to_string()
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        validate_processes(processes)?;

        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by(|a, b| (a.arrival, &a.name).cmp(&(b.arrival, &b.name)));

        let mut clock: i64 = 0;
        let mut intervals = Vec::with_capacity(order.len());

        for p in order {
            if clock < p.arrival {
                trace!("FCFS idle {clock}..{}", p.arrival);
                clock = p.arrival;
            }
            let end = clock + p.burst;
            intervals.push(ExecutionInterval::new(&p.name, clock, end));
            clock = end;
        }

        Ok(finish(self.name(), processes, intervals))
    }
}

/// Simulates FCFS over `processes`.
pub fn simulate_fcfs(processes: &[Process]) -> SimulationResult {
    Fcfs.simulate(processes)
}
