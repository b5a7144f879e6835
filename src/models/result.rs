//! Simulation result model.
//!
//! A run result bundles the timeline produced by one algorithm with the
//! metrics derived from it. The scenario name is not known to simulators;
//! the orchestrator stamps it afterwards with [`RunResult::with_scenario`].

use serde::{Deserialize, Serialize};

use super::ExecutionInterval;

/// Timing metrics for a single process after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process name.
    pub name: String,
    /// Arrival time.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// End of the last interval belonging to the process.
    pub completion: i64,
    /// completion - arrival.
    pub turnaround: i64,
    /// turnaround - burst.
    pub waiting: i64,
    /// first dispatch - arrival.
    pub response: i64,
}

/// Aggregate statistics over all processes of a run.
///
/// All fields are zero for an empty process list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Observed changes of the running process between adjacent intervals.
    pub context_switches: usize,
    /// Latest interval end.
    pub makespan: i64,
    /// Busy time / makespan (0.0..=1.0).
    pub cpu_utilization: f64,
}

/// The outcome of running one algorithm over one process list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Algorithm label (e.g. "FCFS", "Round Robin (q=3)").
    pub algorithm: String,
    /// Scenario name, stamped by the orchestrator.
    pub scenario: Option<String>,
    /// Per-process metrics, in the order of the input process list.
    pub processes: Vec<ProcessMetrics>,
    /// Execution intervals, in emission order.
    pub intervals: Vec<ExecutionInterval>,
    /// Aggregate statistics.
    pub aggregates: Aggregates,
}

impl RunResult {
    /// Creates a result without a scenario name.
    pub fn new(
        algorithm: impl Into<String>,
        processes: Vec<ProcessMetrics>,
        intervals: Vec<ExecutionInterval>,
        aggregates: Aggregates,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            scenario: None,
            processes,
            intervals,
            aggregates,
        }
    }

    /// Returns the result stamped with a scenario name.
    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }

    /// Returns the result with a replaced algorithm label.
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Metrics for a given process.
    pub fn metrics_for(&self, name: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.name == name)
    }

    /// All intervals belonging to a given process.
    pub fn intervals_for(&self, name: &str) -> Vec<&ExecutionInterval> {
        self.intervals.iter().filter(|i| i.process == name).collect()
    }

    /// Whether the run scheduled nothing.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty() && self.intervals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> RunResult {
        RunResult::new(
            "SRTF",
            Vec::new(),
            vec![
                ExecutionInterval::new("P1", 0, 2),
                ExecutionInterval::new("P2", 2, 6),
                ExecutionInterval::new("P1", 6, 11),
            ],
            Aggregates::default(),
        )
    }

    #[test]
    fn test_result_builders() {
        let r = sample_result();
        assert_eq!(r.scenario, None);

        let r = r.with_scenario("Scenario 1").with_algorithm("Shortest Remaining");
        assert_eq!(r.scenario.as_deref(), Some("Scenario 1"));
        assert_eq!(r.algorithm, "Shortest Remaining");
    }

    #[test]
    fn test_intervals_for() {
        let r = sample_result();
        assert_eq!(r.intervals_for("P1").len(), 2);
        assert_eq!(r.intervals_for("P2").len(), 1);
        assert!(r.intervals_for("P9").is_empty());
    }

    #[test]
    fn test_metrics_for() {
        let mut r = sample_result();
        assert!(r.metrics_for("P1").is_none());

        r.processes.push(ProcessMetrics {
            name: "P1".to_string(),
            arrival: 0,
            burst: 7,
            completion: 11,
            turnaround: 11,
            waiting: 4,
            response: 0,
        });
        assert_eq!(r.metrics_for("P1").map(|m| m.waiting), Some(4));
    }

    #[test]
    fn test_empty_result() {
        let r = RunResult::new("FCFS", Vec::new(), Vec::new(), Aggregates::default());
        assert!(r.is_empty());
        assert_eq!(r.aggregates.context_switches, 0);
    }
}
