//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Keep a pending set of all process indices.
//! 2. Among pending processes with `arrival <= clock`, pick the minimum by
//!    `(burst, arrival, name)`; input position breaks any remaining tie.
//! 3. Run the pick to completion, then repeat.
//! 4. With nothing available, jump the clock to the earliest pending arrival.
//!
//! Selection happens only at completion boundaries.
//!
//! # Complexity
//! O(n^2) over n processes.

use log::trace;

use super::{finish, SimulationResult, Simulator};
use crate::models::{ExecutionInterval, Process};
use crate::validation::validate_processes;

/// Non-preemptive Shortest-Job-First simulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Simulator for Sjf {
    fn name(&self) -> String {
        "SJF".to_string()
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        validate_processes(processes)?;

        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut clock: i64 = 0;
        let mut intervals = Vec::with_capacity(processes.len());

        while !pending.is_empty() {
            let pick = pending
                .iter()
                .enumerate()
                .filter(|&(_, &idx)| processes[idx].has_arrived(clock))
                .min_by_key(|&(_, &idx)| {
                    let p = &processes[idx];
                    (p.burst, p.arrival, p.name.as_str(), idx)
                })
                .map(|(pos, _)| pos);

            let Some(pos) = pick else {
                let next_arrival = pending
                    .iter()
                    .map(|&idx| processes[idx].arrival)
                    .min()
                    .unwrap_or(clock);
                trace!("SJF idle {clock}..{next_arrival}");
                clock = next_arrival;
                continue;
            };

            let p = &processes[pending.remove(pos)];
            let end = clock + p.burst;
            trace!("SJF dispatch {} at {clock}", p.name);
            intervals.push(ExecutionInterval::new(&p.name, clock, end));
            clock = end;
        }

        Ok(finish(self.name(), processes, intervals))
    }
}

/// Simulates non-preemptive SJF over `processes`.
pub fn simulate_sjf(processes: &[Process]) -> SimulationResult {
    Sjf.simulate(processes)
}
