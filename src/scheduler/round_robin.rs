//! Round Robin with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Admission order: processes stably sorted by arrival.
//! 2. Admit every arrived process into a FIFO ready queue.
//! 3. Pop the head and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during that run, **then** requeue the
//!    preempted process at the tail if it still has work.
//! 5. With an empty queue, jump to the next arrival or stop.
//!
//! The ordering in step 4 lets newcomers run ahead of the process that
//! was just preempted; swapping it changes turnaround and waiting times.
//!
//! # Complexity
//! O(B / q + n log n) dispatches, where B = total burst.

use std::collections::VecDeque;

use log::trace;

use super::{finish, SimulationResult, Simulator};
use crate::models::{ExecutionInterval, Process};
use crate::validation::{validate_processes, validate_quantum};

/// Round Robin simulator.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{RoundRobin, Simulator};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let result = RoundRobin::new(2).simulate(&processes).unwrap();
/// assert_eq!(result.algorithm, "Round Robin (q=2)");
/// assert_eq!(result.intervals.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin simulator. The quantum is validated on use.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl Simulator for RoundRobin {
    fn name(&self) -> String {
        format!("Round Robin (q={})", self.quantum)
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let mut errors = validate_processes(processes).err().unwrap_or_default();
        if let Err(mut quantum_errors) = validate_quantum(self.quantum) {
            errors.append(&mut quantum_errors);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&idx| processes[idx].arrival);

        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut admitted = 0;
        let mut completed = 0;
        let mut clock: i64 = 0;
        let mut intervals = Vec::new();

        let admit = |clock: i64, admitted: &mut usize, ready: &mut VecDeque<usize>| {
            while let Some(&idx) = order.get(*admitted) {
                if !processes[idx].has_arrived(clock) {
                    break;
                }
                ready.push_back(idx);
                *admitted += 1;
            }
        };

        while completed < processes.len() {
            admit(clock, &mut admitted, &mut ready);

            let Some(idx) = ready.pop_front() else {
                match order.get(admitted) {
                    Some(&next) => {
                        trace!("RR idle {clock}..{}", processes[next].arrival);
                        clock = processes[next].arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = self.quantum.min(remaining[idx]);
            let end = clock + slice;
            trace!("RR dispatch {} {clock}..{end}", processes[idx].name);
            intervals.push(ExecutionInterval::new(&processes[idx].name, clock, end));
            clock = end;
            remaining[idx] -= slice;

            admit(clock, &mut admitted, &mut ready);

            if remaining[idx] > 0 {
                ready.push_back(idx);
            } else {
                completed += 1;
            }
        }

        Ok(finish(self.name(), processes, intervals))
    }
}

/// Simulates Round Robin over `processes` with the given quantum.
pub fn simulate_round_robin(processes: &[Process], quantum: i64) -> SimulationResult {
    RoundRobin::new(quantum).simulate(processes)
}

/// Round Robin with quantum 3.
pub fn simulate_rr_q3(processes: &[Process]) -> SimulationResult {
    simulate_round_robin(processes, 3).map(|r| r.with_algorithm("Round Robin (q=3)"))
}

/// Round Robin with quantum 6.
pub fn simulate_rr_q6(processes: &[Process]) -> SimulationResult {
    simulate_round_robin(processes, 6).map(|r| r.with_algorithm("Round Robin (q=6)"))
}
