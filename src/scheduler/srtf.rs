//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Algorithm
//!
//! Selection happens at t=0, at every arrival and at every completion:
//!
//! 1. Candidates are arrived processes with remaining work.
//! 2. With no candidate, the open interval (if any) is closed and the clock
//!    jumps to the next arrival.
//! 3. Otherwise the candidate with the least remaining time runs until it
//!    completes or the next process arrives. On a tie the running process
//!    keeps the CPU; failing that, the earliest process in input order wins.
//! 4. A new interval opens only when the running process changes, so
//!    consecutive runs of one process coalesce into one interval.
//!
//! Between two such events the selected process only gets shorter, so the
//! timeline matches a unit-by-unit simulation.
//!
//! # Complexity
//! O(E * n) where E = arrivals + completions and n = process count.

use log::trace;

use super::{finish, SimulationResult, Simulator};
use crate::models::{ExecutionInterval, Process};
use crate::validation::validate_processes;

/// Preemptive Shortest-Remaining-Time-First simulator.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::simulate_srtf;
///
/// let processes = vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)];
/// let result = simulate_srtf(&processes).unwrap();
/// assert_eq!(result.intervals.len(), 3); // P1, P2, P1
/// assert_eq!(result.aggregates.context_switches, 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl Simulator for Srtf {
    fn name(&self) -> String {
        "SRTF".to_string()
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        validate_processes(processes)?;

        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut unfinished = processes.len();
        let mut clock: i64 = 0;
        let mut running: Option<usize> = None;
        let mut segment_start: i64 = 0;
        let mut intervals = Vec::new();

        while unfinished > 0 {
            let Some(idx) = select_shortest(processes, &remaining, clock, running) else {
                if let Some(prev) = running.take() {
                    intervals.push(ExecutionInterval::new(
                        &processes[prev].name,
                        segment_start,
                        clock,
                    ));
                }
                let next_arrival = processes
                    .iter()
                    .zip(&remaining)
                    .filter(|&(p, &left)| left > 0 && !p.has_arrived(clock))
                    .map(|(p, _)| p.arrival)
                    .min();
                match next_arrival {
                    Some(arrival) => {
                        trace!("SRTF idle {clock}..{arrival}");
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            if running != Some(idx) {
                if let Some(prev) = running {
                    intervals.push(ExecutionInterval::new(
                        &processes[prev].name,
                        segment_start,
                        clock,
                    ));
                }
                trace!("SRTF switch to {} at {clock}", processes[idx].name);
                running = Some(idx);
                segment_start = clock;
            }

            let run = match next_arrival_after(processes, clock) {
                Some(arrival) => remaining[idx].min(arrival - clock),
                None => remaining[idx],
            };
            remaining[idx] -= run;
            clock += run;
            if remaining[idx] == 0 {
                unfinished -= 1;
            }
        }

        if let Some(prev) = running {
            intervals.push(ExecutionInterval::new(
                &processes[prev].name,
                segment_start,
                clock,
            ));
        }

        Ok(finish(self.name(), processes, intervals))
    }
}

/// Picks the candidate with least remaining time at `clock`.
///
/// Ties keep `running` on the CPU when it is among the minimal set,
/// otherwise the lowest input index wins.
fn select_shortest(
    processes: &[Process],
    remaining: &[i64],
    clock: i64,
    running: Option<usize>,
) -> Option<usize> {
    let is_candidate = |idx: usize| processes[idx].has_arrived(clock) && remaining[idx] > 0;

    let best = (0..processes.len())
        .filter(|&idx| is_candidate(idx))
        .min_by_key(|&idx| (remaining[idx], idx))?;

    match running {
        Some(current) if is_candidate(current) && remaining[current] == remaining[best] => {
            Some(current)
        }
        _ => Some(best),
    }
}

fn next_arrival_after(processes: &[Process], clock: i64) -> Option<i64> {
    processes
        .iter()
        .map(|p| p.arrival)
        .filter(|&arrival| arrival > clock)
        .min()
}

/// Simulates SRTF over `processes`.
pub fn simulate_srtf(processes: &[Process]) -> SimulationResult {
    Srtf.simulate(processes)
}
