//! Process (job) model.
//!
//! A process is the unit of work handed to a simulator: a name, the time
//! it becomes eligible to run, and the total CPU time it needs.

use serde::{Deserialize, Serialize};

/// A synthetic process to be scheduled.
///
/// # Time Representation
/// All times are abstract integer time units relative to t=0. Signed
/// integers are used so that malformed input (negative arrival, zero or
/// negative burst) can be represented and rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier within a scenario.
    pub name: String,
    /// Time at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(name: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            name: name.into(),
            arrival,
            burst,
        }
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival <= time
    }
}

/// Sum of all bursts in a process list, or `None` if it overflows `i64`.
pub fn total_burst(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("P1", 3, 8);
        assert_eq!(p.name, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 8);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("P1", 3, 8);
        assert!(!p.has_arrived(2));
        assert!(p.has_arrived(3));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_total_burst() {
        let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
        assert_eq!(total_burst(&processes), Some(12));
        assert_eq!(total_burst(&[]), Some(0));

        let huge = vec![Process::new("P1", 0, i64::MAX), Process::new("P2", 0, 1)];
        assert_eq!(total_burst(&huge), None);
    }
}
