//! Field identifiers and values for the list report's data source

use std::fmt;

/// Identifies a queryable field, like `supplier_ID` or `averageRating`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldId(String);

impl FieldId {
    /// Create a new field identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A value read from a record field, compared against filter conditions
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Float(f64),
}

impl FieldValue {
    /// Returns the type name of this field value for error messages
    pub fn get_type(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "String",
            FieldValue::Float(_) => "Float",
        }
    }
}
