//! Execution interval (Gantt segment) model.

use serde::{Deserialize, Serialize};

/// A contiguous `[start, end)` span during which one process holds the CPU.
///
/// Preemptive algorithms may emit several intervals per process;
/// non-preemptive ones emit exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Name of the process occupying the CPU.
    pub process: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process: process.into(),
            start,
            end,
        }
    }

    /// Length of the interval (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two intervals share any instant.
    ///
    /// Touching intervals (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}
