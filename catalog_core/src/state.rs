//! Serializable snapshot of the custom filter state
//!
//! The snapshot is what survives navigation: the host hands it to the
//! app-state store on save and back to the filter bar on restore.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Token;

/// Snapshot of the custom filter values for later restoration.
///
/// Members that were not captured are omitted from the serialized form
/// entirely rather than written as null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSnapshot {
    /// Selected value of the average-rating indicator
    #[serde(rename = "AverageRatingValue", skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Selected supplier tokens as (key, text) pairs, in selection order
    #[serde(rename = "Supplier", skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<Vec<(String, String)>>,
}

impl FilterSnapshot {
    /// Capture a snapshot from the current control state.
    ///
    /// The rating is stored whenever it is present, including 0; suppliers
    /// are stored only when at least one token is selected.
    pub fn capture(rating: Option<f64>, tokens: &[Token]) -> Self {
        let suppliers = if tokens.is_empty() {
            None
        } else {
            Some(
                tokens
                    .iter()
                    .map(|token| (token.key.clone(), token.text.clone()))
                    .collect(),
            )
        };

        debug!(
            "Capturing filter snapshot: rating={:?}, suppliers={}",
            rating,
            tokens.len()
        );

        Self {
            average_rating: rating,
            suppliers,
        }
    }

    /// Rebuild the supplier tokens stored in this snapshot, in stored order
    pub fn tokens(&self) -> Vec<Token> {
        self.suppliers
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|(key, text)| Token::new(key.as_str(), text.as_str()))
            .collect()
    }

    /// True when the snapshot carries no filter state at all
    pub fn is_empty(&self) -> bool {
        self.average_rating.is_none() && self.suppliers.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // ===== Capture =====

    #[test]
    fn test_capture_empty_state() {
        init_logging();
        let snapshot = FilterSnapshot::capture(None, &[]);

        assert_eq!(snapshot.average_rating, None);
        assert_eq!(snapshot.suppliers, None);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_capture_rating_zero_is_stored() {
        let snapshot = FilterSnapshot::capture(Some(0.0), &[]);

        assert_eq!(snapshot.average_rating, Some(0.0));
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_capture_suppliers_in_order() {
        let tokens = vec![Token::new("S2", "Globex"), Token::new("S1", "Acme")];

        let snapshot = FilterSnapshot::capture(None, &tokens);

        assert_eq!(
            snapshot.suppliers,
            Some(vec![
                ("S2".to_string(), "Globex".to_string()),
                ("S1".to_string(), "Acme".to_string()),
            ])
        );
    }

    // ===== Round Trip =====

    #[test]
    fn test_tokens_round_trip() {
        let tokens = vec![
            Token::new("S1", "Acme Industries"),
            Token::new("S2", "Globex"),
            Token::new("S1", "Acme Industries"), // duplicates survive
        ];

        let snapshot = FilterSnapshot::capture(Some(3.0), &tokens);

        assert_eq!(snapshot.tokens(), tokens);
    }

    #[test]
    fn test_tokens_of_empty_snapshot() {
        assert!(FilterSnapshot::default().tokens().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let snapshot = FilterSnapshot::capture(Some(4.0), &[Token::new("S1", "Acme")]);

        let value = serde_json::to_value(&snapshot).unwrap();
        let restored: FilterSnapshot = serde_json::from_value(value).unwrap();

        assert_eq!(restored, snapshot);
    }

    // ===== Serialized Shape =====

    #[test]
    fn test_serialized_member_names() {
        let snapshot = FilterSnapshot::capture(Some(4.0), &[Token::new("S1", "Acme")]);

        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(
            value,
            json!({
                "AverageRatingValue": 4.0,
                "Supplier": [["S1", "Acme"]],
            })
        );
    }

    #[test]
    fn test_absent_members_are_omitted() {
        let value = serde_json::to_value(FilterSnapshot::capture(None, &[])).unwrap();

        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_deserialize_missing_members() {
        let snapshot: FilterSnapshot = serde_json::from_value(json!({})).unwrap();

        assert!(snapshot.is_empty());
    }
}
