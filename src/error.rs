//! Simulation error type.

use std::fmt;

use crate::validation::ValidationError;

/// Errors raised before a simulation runs.
///
/// Engines themselves are total over validated input; every variant here
/// is a precondition violation detected up front.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Round-Robin quantum is zero or negative.
    InvalidQuantum { quantum: i64 },
    /// The process batch failed validation.
    InvalidInput(Vec<ValidationError>),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuantum { quantum } => {
                write!(f, "invalid time quantum: {quantum} (must be > 0)")
            }
            Self::InvalidInput(errors) => {
                write!(f, "invalid process batch: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::validation::validate_processes;

    #[test]
    fn test_display_quantum() {
        let err = SimulationError::InvalidQuantum { quantum: 0 };
        assert_eq!(err.to_string(), "invalid time quantum: 0 (must be > 0)");
    }

    #[test]
    fn test_display_joins_validation_messages() {
        let errors = validate_processes(&[Process::new(1, -1, 0)]).unwrap_err();
        let err = SimulationError::from(errors);
        let msg = err.to_string();
        assert!(msg.starts_with("invalid process batch: "));
        assert!(msg.contains("negative arrival"));
        assert!(msg.contains("; "));
    }
}
