//! Supplier records offered by the selection dialog

use serde::{Deserialize, Serialize};

use crate::Token;

/// A selectable supplier record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
}

impl Supplier {
    /// Create a new supplier record
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The token this supplier contributes to the filter bar when selected
    pub fn to_token(&self) -> Token {
        Token::new(self.id.as_str(), self.name.as_str())
    }
}
