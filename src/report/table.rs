//! Plain-text metric tables.

use std::fmt::Write;

use crate::models::{Aggregates, RunResult};

/// Per-process metrics, one row per process in input order.
pub fn metrics_table(result: &RunResult) -> String {
    let name_width = result
        .processes
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(0)
        .max("Process".len());

    let mut out = format!(
        "{:<name_width$}  {:>7}  {:>5}  {:>10}  {:>10}  {:>7}  {:>8}\n",
        "Process", "Arrival", "Burst", "Completion", "Turnaround", "Waiting", "Response"
    );
    for m in &result.processes {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>7}  {:>5}  {:>10}  {:>10}  {:>7}  {:>8}",
            m.name, m.arrival, m.burst, m.completion, m.turnaround, m.waiting, m.response
        );
    }
    out
}

/// Averages and run-wide statistics.
pub fn averages_table(aggregates: &Aggregates) -> String {
    let rows = [
        ("Average turnaround", format!("{:.2}", aggregates.avg_turnaround)),
        ("Average waiting", format!("{:.2}", aggregates.avg_waiting)),
        ("Average response", format!("{:.2}", aggregates.avg_response)),
        ("Context switches", aggregates.context_switches.to_string()),
        ("Makespan", aggregates.makespan.to_string()),
        (
            "CPU utilization",
            format!("{:.1}%", aggregates.cpu_utilization * 100.0),
        ),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<20}{value:>10}");
    }
    out
}

/// Side-by-side averages for several runs of the same scenario.
pub fn comparison_table(results: &[RunResult]) -> String {
    let label_width = results
        .iter()
        .map(|r| r.algorithm.len())
        .max()
        .unwrap_or(0)
        .max("Algorithm".len());

    let mut out = format!(
        "{:<label_width$}  {:>14}  {:>11}  {:>12}  {:>8}\n",
        "Algorithm", "Avg turnaround", "Avg waiting", "Avg response", "Switches"
    );
    for r in results {
        let a = &r.aggregates;
        let _ = writeln!(
            out,
            "{:<label_width$}  {:>14.2}  {:>11.2}  {:>12.2}  {:>8}",
            r.algorithm, a.avg_turnaround, a.avg_waiting, a.avg_response, a.context_switches
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{simulate_fcfs, simulate_rr_q3};

    fn sample() -> Vec<Process> {
        vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)]
    }

    #[test]
    fn test_metrics_table() {
        let result = simulate_fcfs(&sample()).unwrap();
        let table = metrics_table(&result);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Process  Arrival  Burst  Completion"));
        assert_eq!(
            lines[2],
            "P2             1      4          12          11        7         7"
        );
    }

    #[test]
    fn test_averages_table() {
        let result = simulate_fcfs(&sample()).unwrap();
        let table = averages_table(&result.aggregates);
        assert!(table.contains("Average waiting           3.50"));
        assert!(table.contains("Context switches             1"));
        assert!(table.contains("CPU utilization         100.0%"));
    }

    #[test]
    fn test_comparison_table() {
        let results = vec![
            simulate_fcfs(&sample()).unwrap(),
            simulate_rr_q3(&sample()).unwrap(),
        ];
        let table = comparison_table(&results);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Algorithm        "));
        assert!(lines[1].starts_with("FCFS "));
        assert!(lines[2].starts_with("Round Robin (q=3)"));
    }

    #[test]
    fn test_empty_tables() {
        let result = simulate_fcfs(&[]).unwrap();
        assert_eq!(metrics_table(&result).lines().count(), 1);
        assert_eq!(comparison_table(&[]).lines().count(), 1);
    }
}
