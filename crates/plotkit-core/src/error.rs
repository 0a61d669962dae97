//! Error types for the plotkit data model
//!
//! Provides a unified error type shared by all plotkit crates.

use thiserror::Error;

/// Core error type for histogram and graph operations
#[derive(Error, Debug)]
pub enum Error {
    /// Bin edges not strictly ascending, repeated, or too few
    #[error("Invalid bin edges: {0}")]
    InvalidBinEdges(String),

    /// Axis range with low >= high
    #[error("Invalid axis range: low {low} must be less than high {high}")]
    InvalidRange { low: f64, high: f64 },

    /// Fewer than one bin requested
    #[error("Invalid bin count: {0} (at least 1 bin required)")]
    InvalidBinCount(usize),

    /// Constructor received the wrong number of binning arguments
    #[error("Argument count mismatch for {expected_dim} dimension(s): {detail}")]
    ArgumentCount { expected_dim: usize, detail: String },

    /// Constructor received an argument of the wrong kind
    #[error("Argument type mismatch: {0}")]
    ArgumentType(String),

    /// Operand length does not match the histogram dimension
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Operand kind not supported by the operation
    #[error("Unsupported operand: {0}")]
    UnsupportedOperand(String),

    /// Bin or point index outside valid bounds
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// Scalar division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Stack member is not a supported histogram kind
    #[error("Unsupported stack member: {0}")]
    UnsupportedMemberType(String),

    /// Operands with incompatible shapes combined bin-wise
    #[error("Incompatible operand: {0}")]
    IncompatibleOperand(String),

    /// Extrema or evaluation requested on a graph with zero points
    #[error("Empty graph: {0}")]
    EmptyGraph(String),

    /// Aggregate query on a stack with no members
    #[error("Empty stack: {0}")]
    EmptyStack(String),

    /// IO error (graph file ingestion)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an index outside `[0, len)` (or the sentinel
    /// range, depending on the caller's contract)
    pub fn index_out_of_range(index: isize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an error for an operand of the wrong length
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an error for too few or leftover constructor arguments
    pub fn argument_count(expected_dim: usize, detail: impl Into<String>) -> Self {
        Self::ArgumentCount {
            expected_dim,
            detail: detail.into(),
        }
    }

    /// Create an error for bin-wise arithmetic between mismatched shapes
    pub fn shape_mismatch(context: &str) -> Self {
        Self::IncompatibleOperand(format!("{context}: operand shapes differ"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidBinEdges("edges must be sorted".to_string());
        assert_eq!(err.to_string(), "Invalid bin edges: edges must be sorted");

        let err = Error::InvalidRange { low: 5.0, high: 1.0 };
        assert_eq!(
            err.to_string(),
            "Invalid axis range: low 5 must be less than high 1"
        );

        let err = Error::DimensionMismatch { expected: 2, actual: 4 };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 2, got 4");

        let err = Error::IndexOutOfRange { index: -2, len: 5 };
        assert_eq!(err.to_string(), "Index -2 out of range for length 5");

        let err = Error::DivisionByZero;
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::index_out_of_range(7, 5) {
            Error::IndexOutOfRange { index, len } => {
                assert_eq!(index, 7);
                assert_eq!(len, 5);
            }
            _ => panic!("Wrong error type"),
        }

        match Error::dimension_mismatch(3, 1) {
            Error::DimensionMismatch { expected, actual } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 1);
            }
            _ => panic!("Wrong error type"),
        }

        let err = Error::argument_count(2, "1 leftover argument");
        assert_eq!(
            err.to_string(),
            "Argument count mismatch for 2 dimension(s): 1 leftover argument"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("Wrong error type"),
        }
    }
}
