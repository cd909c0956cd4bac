//! Error types for filter matching

use std::fmt;

/// Errors that can occur when matching a condition against a field value
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Operator is not supported for the given field type
    UnsupportedOperator {
        field_type: String,
        operator: String,
        supported: Vec<String>,
    },
    /// Filter value type doesn't match the field type
    TypeMismatch {
        field_type: String,
        filter_type: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::UnsupportedOperator {
                field_type,
                operator,
                supported,
            } => {
                write!(
                    f,
                    "Cannot use '{}' operator on {} fields. Supported: {}",
                    operator,
                    field_type,
                    supported.join(", ")
                )
            }
            FilterError::TypeMismatch {
                field_type,
                filter_type,
            } => {
                write!(
                    f,
                    "Type mismatch: {} field cannot be compared with {} value",
                    field_type, filter_type
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}
