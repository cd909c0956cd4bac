//! Selection tokens held by the supplier multi-select

/// A user-selected (key, display text) pair representing one chosen supplier.
///
/// Tokens form an ordered sequence reflecting selection order. The filter
/// bar does not enforce uniqueness, so duplicate tokens are possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub text: String,
}

impl Token {
    /// Create a new token
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}
