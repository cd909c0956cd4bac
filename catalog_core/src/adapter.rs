//! Translation between filter-bar control state and query filter conditions

use crate::filter::FilterCondition;
use crate::{FieldId, Token};

/// Field holding a product's average customer rating
pub const AVERAGE_RATING_FIELD: &str = "averageRating";

/// Half-width of the rating range applied around a selected rating
const RATING_RANGE_HALF_WIDTH: f64 = 0.5;

/// Build one equality condition per selected token, in selection order.
///
/// Each condition compares `field` against the token's key. Duplicate
/// tokens produce duplicate conditions. An empty selection produces no
/// conditions.
pub fn tokens_to_conditions(tokens: &[Token], field: &FieldId) -> Vec<FilterCondition> {
    tokens
        .iter()
        .map(|token| FilterCondition::equals(field.clone(), token.key.as_str()))
        .collect()
}

/// Build the average-rating range condition for a selected rating.
///
/// An absent or non-positive rating applies no filter. Otherwise the
/// condition spans the rating +/- 0.5; the bounds are not clamped to the
/// rating scale, so a rating of 5 filters on [4.5, 5.5].
pub fn rating_to_condition(rating: Option<f64>) -> Option<FilterCondition> {
    let rating = rating?;
    if rating <= 0.0 {
        return None;
    }

    Some(FilterCondition::between(
        FieldId::new(AVERAGE_RATING_FIELD),
        rating - RATING_RANGE_HALF_WIDTH,
        rating + RATING_RANGE_HALF_WIDTH,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FilterOperator, FilterValue};
    use assert_matches::assert_matches;

    fn supplier_field() -> FieldId {
        FieldId::new("supplier_ID")
    }

    // ===== Token Conditions =====

    #[test]
    fn test_tokens_to_conditions_one_per_token() {
        let tokens = vec![
            Token::new("S1", "Acme Industries"),
            Token::new("S2", "Globex"),
            Token::new("S3", "Initech"),
        ];

        let conditions = tokens_to_conditions(&tokens, &supplier_field());

        assert_eq!(conditions.len(), 3);
        for (condition, token) in conditions.iter().zip(&tokens) {
            assert_eq!(condition.field, supplier_field());
            assert_matches!(condition.operator, FilterOperator::Equal);
            assert_matches!(condition.value, FilterValue::String(ref key) if key == &token.key);
        }
    }

    #[test]
    fn test_tokens_to_conditions_preserves_order() {
        let tokens = vec![Token::new("S9", "Last"), Token::new("S1", "First")];

        let conditions = tokens_to_conditions(&tokens, &supplier_field());

        assert_matches!(conditions[0].value, FilterValue::String(ref key) if key == "S9");
        assert_matches!(conditions[1].value, FilterValue::String(ref key) if key == "S1");
    }

    #[test]
    fn test_tokens_to_conditions_empty() {
        assert!(tokens_to_conditions(&[], &supplier_field()).is_empty());
    }

    #[test]
    fn test_tokens_to_conditions_keeps_duplicates() {
        let tokens = vec![Token::new("S1", "Acme"), Token::new("S1", "Acme")];

        let conditions = tokens_to_conditions(&tokens, &supplier_field());

        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0], conditions[1]);
    }

    // ===== Rating Condition =====

    #[test]
    fn test_rating_to_condition_absent() {
        assert_eq!(rating_to_condition(None), None);
    }

    #[test]
    fn test_rating_to_condition_zero() {
        assert_eq!(rating_to_condition(Some(0.0)), None);
    }

    #[test]
    fn test_rating_to_condition_negative() {
        assert_eq!(rating_to_condition(Some(-1.0)), None);
    }

    #[test]
    fn test_rating_to_condition_range() {
        let condition = rating_to_condition(Some(3.0)).unwrap();

        assert_eq!(condition.field, FieldId::new(AVERAGE_RATING_FIELD));
        assert_matches!(condition.operator, FilterOperator::Between);
        assert_matches!(condition.value, FilterValue::Range { low, high } if low == 2.5 && high == 3.5);
    }

    #[test]
    fn test_rating_to_condition_top_of_scale_unclamped() {
        let condition = rating_to_condition(Some(5.0)).unwrap();

        assert_matches!(condition.value, FilterValue::Range { low, high } if low == 4.5 && high == 5.5);
    }
}
