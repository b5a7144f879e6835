//! Scenario definitions.
//!
//! A scenario is a named, fixed process list. Two are built in; others
//! can be loaded from JSON:
//!
//! ```json
//! {
//!   "name": "Lab 3",
//!   "processes": [
//!     { "name": "P1", "arrival": 0, "burst": 8 },
//!     { "name": "P2", "arrival": 1, "burst": 4 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Process;
use crate::validation::validate_scenario;

/// A named process list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable name, stamped onto run results.
    pub name: String,
    /// Processes in declaration order.
    pub processes: Vec<Process>,
}

impl Scenario {
    /// Creates a scenario.
    pub fn new(name: impl Into<String>, processes: Vec<Process>) -> Self {
        Self {
            name: name.into(),
            processes,
        }
    }

    /// Scenario 1: mixed short and long bursts arriving close together.
    pub fn mixed_load() -> Self {
        Self::new(
            "Scenario 1 - Mixed load",
            vec![
                Process::new("P1", 0, 8),
                Process::new("P2", 1, 4),
                Process::new("P3", 2, 9),
                Process::new("P4", 3, 5),
                Process::new("P5", 4, 2),
            ],
        )
    }

    /// Scenario 2: arrivals spread out, with idle gaps in between.
    pub fn scattered_arrivals() -> Self {
        Self::new(
            "Scenario 2 - Scattered arrivals",
            vec![
                Process::new("P1", 0, 6),
                Process::new("P2", 3, 2),
                Process::new("P3", 8, 4),
                Process::new("P4", 15, 3),
                Process::new("P5", 17, 7),
                Process::new("P6", 30, 2),
            ],
        )
    }

    /// Built-in scenario by number (1 or 2).
    pub fn builtin(id: u32) -> Result<Self> {
        match id {
            1 => Ok(Self::mixed_load()),
            2 => Ok(Self::scattered_arrivals()),
            other => Err(Error::UnknownScenario(other.to_string())),
        }
    }

    /// All built-in scenarios in numeric order.
    pub fn builtins() -> Vec<Self> {
        vec![Self::mixed_load(), Self::scattered_arrivals()]
    }

    /// Parses and validates a scenario from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Loads and validates a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Validates the process list, including name uniqueness.
    pub fn validate(&self) -> Result<()> {
        validate_scenario(&self.processes)?;
        Ok(())
    }
}
