/*!
# Unified Error Type

A single error enum covering every failure mode the solver can surface, from
malformed DIMACS input through internal invariant violations. Modeled on the
unified-enum error pattern this crate's core previously used for a much wider
set of graph algorithms; narrowed here to the four kinds the engine actually
produces.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for all MMC operations.
#[derive(Debug)]
pub enum MmcError {
    /// Malformed DIMACS input: bad header, non-positive id, self-loop, truncated stream.
    InputFormat { line: Option<usize>, message: String },

    /// A feature of the input the driver refuses to handle (e.g. parallel edges in strict mode).
    Unsupported(String),

    /// The auxiliary graph on the odd-degree node set admits no perfect matching.
    MatchingInfeasible(String),

    /// A debug-only invariant was violated (non-negative Dijkstra costs, monotone γ, J* parity).
    Internal(String),

    /// Failure opening or writing a file.
    Io(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MmcError>;

impl MmcError {
    pub fn input_format(message: impl Into<String>) -> Self {
        MmcError::InputFormat {
            line: None,
            message: message.into(),
        }
    }

    pub fn input_format_at(line: usize, message: impl Into<String>) -> Self {
        MmcError::InputFormat {
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        MmcError::Unsupported(message.into())
    }

    pub fn matching_infeasible(message: impl Into<String>) -> Self {
        MmcError::MatchingInfeasible(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        MmcError::Internal(message.into())
    }
}

impl fmt::Display for MmcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MmcError::InputFormat { line: Some(l), message } => {
                write!(f, "input format error at line {}: {}", l, message)
            }
            MmcError::InputFormat { line: None, message } => {
                write!(f, "input format error: {}", message)
            }
            MmcError::Unsupported(msg) => write!(f, "unsupported input: {}", msg),
            MmcError::MatchingInfeasible(msg) => write!(f, "no perfect matching exists: {}", msg),
            MmcError::Internal(msg) => write!(f, "internal invariant violated: {}", msg),
            MmcError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for MmcError {}

impl From<std::io::Error> for MmcError {
    fn from(e: std::io::Error) -> Self {
        MmcError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MmcError::input_format_at(3, "expected 'p edge N M'");
        assert_eq!(
            format!("{}", err),
            "input format error at line 3: expected 'p edge N M'"
        );

        let err = MmcError::matching_infeasible("odd |T| = 3");
        assert_eq!(format!("{}", err), "no perfect matching exists: odd |T| = 3");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MmcError = io_err.into();
        assert!(matches!(err, MmcError::Io(_)));
    }
}
