//! Inspector error types

use std::fmt;

use int4d_math::MathError;

/// Error type for inspector edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    /// No field carries the given label
    UnknownField(String),
    /// The edited text is not an integer
    Parse {
        /// Label of the field being edited
        field: String,
        /// The rejected input
        text: String,
    },
    /// The target rejected the new value
    Math(MathError),
}

impl fmt::Display for InspectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectorError::UnknownField(label) => write!(f, "Unknown inspector field: {}", label),
            InspectorError::Parse { field, text } => {
                write!(f, "Cannot parse '{}' as an integer for field {}", text, field)
            }
            InspectorError::Math(err) => write!(f, "Inspector edit rejected: {}", err),
        }
    }
}

impl std::error::Error for InspectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectorError::Math(err) => Some(err),
            InspectorError::UnknownField(_) => None,
            InspectorError::Parse { .. } => None,
        }
    }
}

impl From<MathError> for InspectorError {
    fn from(err: MathError) -> Self {
        InspectorError::Math(err)
    }
}
