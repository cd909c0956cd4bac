//! Filter condition types and matching logic

mod errors;
mod numeric;
mod string;
mod types;

// Re-export types
pub use errors::FilterError;
pub use types::*;

use crate::{FieldId, FieldValue};

/// A single condition contributed to the list report's data query
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub field: FieldId,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FilterCondition {
    /// Create a new filter condition
    pub fn new(field: FieldId, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    /// Equality condition on a field
    pub fn equals(field: FieldId, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Equal, FilterValue::String(value.into()))
    }

    /// Inclusive range condition on a numeric field
    pub fn between(field: FieldId, low: f64, high: f64) -> Self {
        Self::new(field, FilterOperator::Between, FilterValue::Range { low, high })
    }

    /// Case-insensitive substring condition on a string field
    pub fn contains(field: FieldId, value: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Contains, FilterValue::String(value.into()))
    }

    /// Check if a field value matches this condition
    pub fn matches(&self, field_value: &FieldValue) -> Result<bool, FilterError> {
        match field_value {
            FieldValue::String(_) => {
                string::compare_string(field_value, &self.operator, &self.value)
            }
            FieldValue::Float(_) => {
                numeric::compare_float(field_value, &self.operator, &self.value)
            }
        }
    }
}
