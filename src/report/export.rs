//! JSON export of run results.
//!
//! Results are serialized verbatim: algorithm, scenario, per-process
//! metrics, intervals and aggregates.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::models::RunResult;
use crate::simulation::Algorithm;

/// Pretty-printed JSON for one result.
pub fn to_json(result: &RunResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Pretty-printed JSON object keyed by algorithm identifier (`RR_Q3`).
///
/// Results with an unrecognized label are keyed by the label itself.
pub fn to_json_many(results: &[RunResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&by_algorithm(results))?)
}

fn by_algorithm(results: &[RunResult]) -> BTreeMap<&str, &RunResult> {
    results
        .iter()
        .map(|r| {
            let key = Algorithm::from_label(&r.algorithm).map_or(r.algorithm.as_str(), |a| a.id());
            (key, r)
        })
        .collect()
}

/// Writes any serializable value as pretty JSON to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    info!("exported results to {}", path.display());
    Ok(())
}

/// Writes several results to `path` as one object keyed by algorithm identifier.
pub fn write_json_many(path: impl AsRef<Path>, results: &[RunResult]) -> Result<()> {
    write_json(path, &by_algorithm(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scenarios::Scenario;
    use crate::scheduler::{simulate_fcfs, simulate_srtf};
    use crate::simulation;

    fn sample() -> Vec<Process> {
        vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)]
    }

    #[test]
    fn test_to_json_fields() {
        let result = simulate_srtf(&sample()).unwrap().with_scenario("demo");
        let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();

        assert_eq!(value["algorithm"], "SRTF");
        assert_eq!(value["scenario"], "demo");
        assert_eq!(value["processes"][1]["name"], "P2");
        assert_eq!(value["processes"][0]["completion"], 11);
        assert_eq!(value["intervals"].as_array().unwrap().len(), 3);
        assert_eq!(value["aggregates"]["context_switches"], 2);
    }

    #[test]
    fn test_json_round_trip_preserves_result() {
        let result = simulate_fcfs(&sample()).unwrap();
        let back: RunResult = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_to_json_many_keyed_by_algorithm() {
        let results = vec![
            simulate_fcfs(&sample()).unwrap(),
            simulate_srtf(&sample()).unwrap(),
        ];
        let value: serde_json::Value =
            serde_json::from_str(&to_json_many(&results).unwrap()).unwrap();
        assert!(value["FCFS"].is_object());
        assert_eq!(value["SRTF"]["algorithm"], "SRTF");
    }

    #[test]
    fn test_to_json_many_uses_identifiers() {
        let results = simulation::run_all(&Scenario::mixed_load()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&to_json_many(&results).unwrap()).unwrap();

        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["FCFS", "RR_Q3", "RR_Q6", "SJF", "SRTF"]);
        assert_eq!(value["RR_Q3"]["algorithm"], "Round Robin (q=3)");
    }

    #[test]
    fn test_to_json_many_keeps_unknown_label() {
        let result = simulate_fcfs(&sample()).unwrap().with_algorithm("Custom");
        let value: serde_json::Value =
            serde_json::from_str(&to_json_many(&[result]).unwrap()).unwrap();
        assert!(value["Custom"].is_object());
    }

    #[test]
    fn test_write_json() {
        let path = std::env::temp_dir().join(format!(
            "cpu_sched_sim_export_test_{}.json",
            std::process::id()
        ));
        let result = simulate_fcfs(&sample()).unwrap();
        write_json(&path, &result).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let back: RunResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
        let _ = fs::remove_file(&path);
    }
}
