//! Errors raised at the orchestration and I/O boundary.
//!
//! Simulators themselves only fail validation and return
//! [`ValidationError`]s directly.

use std::{error, fmt, io};

use crate::validation::ValidationError;

/// Orchestration, scenario and export errors.
#[derive(Debug)]
pub enum Error {
    /// Algorithm identifier not recognized.
    UnknownAlgorithm(String),
    /// Scenario identifier not recognized.
    UnknownScenario(String),
    /// Input rejected by validation.
    Invalid(Vec<ValidationError>),
    /// Reading or writing a file failed.
    Io(io::Error),
    /// JSON (de)serialization failed.
    Json(serde_json::Error),
}

/// Result alias for orchestration functions.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownAlgorithm(id) => write!(f, "unknown algorithm '{id}'"),
            Error::UnknownScenario(id) => write!(f, "unknown scenario '{id}'"),
            Error::Invalid(errors) => {
                f.write_str("invalid input: ")?;
                for (idx, e) in errors.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Invalid(errors)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_quantum;

    #[test]
    fn test_display() {
        let e = Error::UnknownAlgorithm("LIFO".into());
        assert_eq!(e.to_string(), "unknown algorithm 'LIFO'");

        let e = Error::from(validate_quantum(0).unwrap_err());
        assert_eq!(e.to_string(), "invalid input: Quantum must be positive, got 0");
    }
}
