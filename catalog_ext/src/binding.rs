//! Query binding assembled before the table rebinds

use catalog_core::FilterCondition;
use serde_json::{Map, Value};

/// The outbound data request under construction: ordered filter
/// conditions plus named binding parameters.
///
/// The parameter map is always present, defaulting to empty.
#[derive(Debug, Clone, Default)]
pub struct QueryBinding {
    filters: Vec<FilterCondition>,
    parameters: Map<String, Value>,
}

impl QueryBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Conditions in the order they were contributed
    pub fn filters(&self) -> &[FilterCondition] {
        &self.filters
    }

    /// Append a single condition
    pub fn push_filter(&mut self, condition: FilterCondition) {
        self.filters.push(condition);
    }

    /// Append conditions, preserving their order
    pub fn extend_filters(&mut self, conditions: impl IntoIterator<Item = FilterCondition>) {
        self.filters.extend(conditions);
    }

    /// Set a named binding parameter
    pub fn set_parameter(&mut self, key: impl Into<String>, value: Value) {
        self.parameters.insert(key.into(), value);
    }

    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }
}
