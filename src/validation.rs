//! Input validation for simulation runs.
//!
//! Checks process lists and Round Robin quanta before any interval is
//! emitted. Detects:
//! - Negative arrival times
//! - Zero or negative bursts
//! - Empty process names
//! - Non-positive quanta
//! - Timelines whose end would not fit in `i64`
//! - Duplicate process names (scenario level only)
//!
//! Every check runs; all problems are reported together.

use std::collections::HashSet;
use std::fmt;

use crate::models::{total_burst, Process};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or less).
    NonPositiveBurst,
    /// A process has an empty name.
    EmptyName,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Two processes share the same name.
    DuplicateName,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list for simulation.
///
/// Checks:
/// 1. Every arrival is >= 0
/// 2. Every burst is > 0
/// 3. Every name is non-empty
/// 4. The latest arrival plus the total burst fits in `i64`
///
/// Check 4 runs only when the first three pass. It bounds every clock value
/// a simulator can reach.
///
/// Name uniqueness is not checked here; see [`validate_scenario`].
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, p) in processes.iter().enumerate() {
        if p.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process at position {idx} has an empty name"),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.name, p.arrival),
            ));
        }
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.name, p.burst),
            ));
        }
    }

    if errors.is_empty() {
        if let Some(error) = check_time_bound(processes) {
            errors.push(error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_time_bound(processes: &[Process]) -> Option<ValidationError> {
    let latest = processes.iter().map(|p| p.arrival).max()?;
    let horizon = total_burst(processes).and_then(|total| latest.checked_add(total));
    match horizon {
        Some(_) => None,
        None => Some(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Latest arrival {latest} plus total burst overflows the time range"),
        )),
    }
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates a scenario's process list.
///
/// Runs [`validate_processes`] and additionally rejects duplicate names,
/// since per-process metrics are keyed by name.
pub fn validate_scenario(processes: &[Process]) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();

    let mut names = HashSet::new();
    for p in processes {
        if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_scenario(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_processes(&[]).is_ok());
        assert!(validate_scenario(&[]).is_ok());
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new("P1", -1, 3)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let errors =
            validate_processes(&[Process::new("P1", 0, 0), Process::new("P2", 0, -4)]).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_empty_name() {
        let errors = validate_processes(&[Process::new("", 0, 1)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyName);
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        let errors = validate_quantum(0).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
        assert!(validate_quantum(-3).is_err());
    }

    #[test]
    fn test_duplicate_name_only_at_scenario_level() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P1", 1, 3)];
        assert!(validate_processes(&processes).is_ok());

        let errors = validate_scenario(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_time_overflow() {
        let errors = validate_processes(&[Process::new("P1", i64::MAX - 1, 5)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let bursts = vec![Process::new("P1", 0, i64::MAX), Process::new("P2", 0, 1)];
        let errors = validate_processes(&bursts).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_time_bound_edge_is_valid() {
        assert!(validate_processes(&[Process::new("P1", i64::MAX - 5, 5)]).is_ok());
    }

    #[test]
    fn test_time_bound_skipped_when_other_errors() {
        let processes = vec![Process::new("P1", i64::MAX, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind != ValidationErrorKind::TimeOverflow));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new("P1", -2, 0), Process::new("P1", 0, 1)];
        let errors = validate_scenario(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_display() {
        let errors = validate_quantum(0).unwrap_err();
        assert_eq!(errors[0].to_string(), "Quantum must be positive, got 0");
    }
}
