//! Numeric comparison logic for filters

use super::errors::FilterError;
use super::types::{FilterOperator, FilterValue};
use crate::FieldValue;

const SUPPORTED_OPS: [&str; 2] = ["==", "between"];

/// Compare a float field value against a filter
pub fn compare_float(
    field_value: &FieldValue,
    operator: &FilterOperator,
    filter_value: &FilterValue,
) -> Result<bool, FilterError> {
    let value = match field_value {
        FieldValue::Float(f) => *f,
        _ => {
            return Err(FilterError::TypeMismatch {
                field_type: field_value.get_type().to_string(),
                filter_type: filter_value.type_name().to_string(),
            });
        }
    };

    match filter_value {
        FilterValue::Float(filter_float) => match operator {
            FilterOperator::Equal => Ok((value - filter_float).abs() < f64::EPSILON),
            _ => Err(unsupported_op_error(field_value, operator)),
        },
        FilterValue::Range { low, high } => match operator {
            // Both bounds are inclusive
            FilterOperator::Between => Ok(value >= *low && value <= *high),
            _ => Err(unsupported_op_error(field_value, operator)),
        },
        _ => Err(FilterError::TypeMismatch {
            field_type: field_value.get_type().to_string(),
            filter_type: filter_value.type_name().to_string(),
        }),
    }
}

fn unsupported_op_error(field_value: &FieldValue, operator: &FilterOperator) -> FilterError {
    FilterError::UnsupportedOperator {
        field_type: field_value.get_type().to_string(),
        operator: format!("{:?}", operator),
        supported: SUPPORTED_OPS.iter().map(|s| s.to_string()).collect(),
    }
}
