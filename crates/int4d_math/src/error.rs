//! Math error types
//!
//! Every variant is a programming error detected at the call site. Nothing
//! here is retried or recovered internally.

use std::fmt;

/// Error type for fallible vector operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A component index outside `0..=3` (or `0..N` for smaller vectors)
    IndexOutOfRange {
        /// The index that was addressed
        index: usize,
    },
    /// Argument shape or count was wrong (lengths, value counts, capacities)
    InvalidArgument(String),
    /// The operation is undefined for the receiver's current values
    InvalidOperation(String),
}

impl MathError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        MathError::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_operation(msg: impl Into<String>) -> Self {
        MathError::InvalidOperation(msg.into())
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::IndexOutOfRange { index } => {
                write!(f, "Invalid vector index addressed: {}", index)
            }
            MathError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            MathError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for MathError {}

/// Shorthand result type for this crate
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let err = MathError::IndexOutOfRange { index: 5 };
        let msg = format!("{}", err);
        assert!(msg.contains("index"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = MathError::invalid_argument("length must be 4");
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid argument"));
        assert!(msg.contains("length must be 4"));
    }

    #[test]
    fn test_invalid_operation_display() {
        let err = MathError::invalid_operation("negative component");
        assert_eq!(format!("{}", err), "Invalid operation: negative component");
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(MathError::IndexOutOfRange { index: 9 });
        assert!(err.source().is_none());
        assert!(err.to_string().contains('9'));
    }
}
