//! CPU scheduling simulator.
//!
//! Simulates classic uniprocessor scheduling disciplines over synthetic
//! processes and reports the resulting timeline and timing metrics.
//! Intended for operating-systems coursework: no real workloads, no I/O
//! states, no priorities, one CPU.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionInterval`,
//!   `ProcessMetrics`, `Aggregates`, `RunResult`
//! - **`scheduler`**: FCFS, SJF, SRTF and Round Robin simulators plus the
//!   metrics calculator
//! - **`validation`**: Input checks (negative arrivals, empty bursts,
//!   bad quanta, duplicate names)
//! - **`simulation`**: Algorithm identifiers and scenario runs
//! - **`scenarios`**: Built-in and JSON-loaded process lists
//! - **`workload`**: Seeded random process lists
//! - **`report`**: Gantt chart, tables, JSON export
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::simulate_fcfs;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 8),
//!     Process::new("P2", 1, 4),
//!     Process::new("P3", 2, 9),
//!     Process::new("P4", 3, 5),
//! ];
//! let result = simulate_fcfs(&processes).unwrap();
//! assert_eq!(result.aggregates.avg_waiting, 8.75);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod report;
pub mod scenarios;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
