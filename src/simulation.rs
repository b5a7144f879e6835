//! Algorithm selection and scenario runs.
//!
//! Maps the textual identifiers `FCFS`, `SJF`, `SRTF`, `RR_Q3` and `RR_Q6`
//! to simulators, runs them over a scenario, and stamps the scenario name
//! onto each result.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::scenarios::Scenario;
//! use cpu_sched_sim::simulation::{self, Algorithm};
//!
//! let scenario = Scenario::mixed_load();
//! let algorithm: Algorithm = "srtf".parse().unwrap();
//! let result = simulation::run(algorithm, &scenario).unwrap();
//! assert_eq!(result.scenario.as_deref(), Some("Scenario 1 - Mixed load"));
//! ```

use std::fmt;
use std::str::FromStr;

use log::info;

use crate::error::{Error, Result};
use crate::models::{Process, RunResult};
use crate::scenarios::Scenario;
use crate::scheduler::{
    simulate_fcfs, simulate_rr_q3, simulate_rr_q6, simulate_sjf, simulate_srtf,
    SimulationResult,
};

/// A selectable scheduling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Round Robin, quantum 3.
    RoundRobinQ3,
    /// Round Robin, quantum 6.
    RoundRobinQ6,
}

impl Algorithm {
    /// Every algorithm in canonical order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobinQ3,
        Algorithm::RoundRobinQ6,
    ];

    /// Textual identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobinQ3 => "RR_Q3",
            Algorithm::RoundRobinQ6 => "RR_Q6",
        }
    }

    /// Label carried by results of this algorithm.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobinQ3 => "Round Robin (q=3)",
            Algorithm::RoundRobinQ6 => "Round Robin (q=6)",
        }
    }

    /// The algorithm whose results carry `label`.
    pub fn from_label(label: &str) -> Option<Self> {
        Algorithm::ALL.into_iter().find(|a| a.label() == label)
    }

    /// Runs the algorithm's entry point over `processes`.
    pub fn simulate(&self, processes: &[Process]) -> SimulationResult {
        match self {
            Algorithm::Fcfs => simulate_fcfs(processes),
            Algorithm::Sjf => simulate_sjf(processes),
            Algorithm::Srtf => simulate_srtf(processes),
            Algorithm::RoundRobinQ3 => simulate_rr_q3(processes),
            Algorithm::RoundRobinQ6 => simulate_rr_q6(processes),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownAlgorithm(wanted.to_string()))
    }
}

/// Runs one algorithm over a scenario and stamps the scenario name.
pub fn run(algorithm: Algorithm, scenario: &Scenario) -> Result<RunResult> {
    scenario.validate()?;
    let result = algorithm.simulate(&scenario.processes)?;
    info!(
        "{} on '{}': avg waiting {:.2}",
        algorithm, scenario.name, result.aggregates.avg_waiting
    );
    Ok(result.with_scenario(scenario.name.clone()))
}

/// Runs every algorithm over a scenario, in [`Algorithm::ALL`] order.
pub fn run_all(scenario: &Scenario) -> Result<Vec<RunResult>> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| run(algorithm, scenario))
        .collect()
}
