//! String comparison logic for filters

use super::errors::FilterError;
use super::types::{FilterOperator, FilterValue};
use crate::FieldValue;

/// Compare a string field value against a filter
pub fn compare_string(
    field_value: &FieldValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> Result<bool, FilterError> {
    let value = match field_value {
        FieldValue::String(s) => s.as_str(),
        _ => {
            return Err(FilterError::TypeMismatch {
                field_type: field_value.get_type().to_string(),
                filter_type: filter_value.type_name().to_string(),
            });
        }
    };

    let filter_str = match filter_value {
        FilterValue::String(s) => s,
        _ => {
            return Err(FilterError::TypeMismatch {
                field_type: field_value.get_type().to_string(),
                filter_type: filter_value.type_name().to_string(),
            });
        }
    };

    match operator {
        FilterOperator::Equal => Ok(value.eq_ignore_ascii_case(filter_str)),
        FilterOperator::Contains => {
            Ok(value.to_lowercase().contains(&filter_str.to_lowercase()))
        }
        _ => Err(FilterError::UnsupportedOperator {
            field_type: field_value.get_type().to_string(),
            operator: format!("{:?}", operator),
            supported: vec!["==".to_string(), "contains".to_string()],
        }),
    }
}
