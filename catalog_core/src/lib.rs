//! Core filter model for the catalog list report.
//!
//! This crate provides the data model behind the list report's custom
//! filter fields: filter conditions and matching, supplier tokens and
//! records, and the serializable snapshot that carries filter state
//! across navigation.

mod adapter;
mod field;
pub mod filter;
mod state;
mod supplier;
mod token;

pub use adapter::{AVERAGE_RATING_FIELD, rating_to_condition, tokens_to_conditions};
pub use field::{FieldId, FieldValue};
pub use filter::{FilterCondition, FilterError, FilterOperator, FilterValue};
pub use state::FilterSnapshot;
pub use supplier::Supplier;
pub use token::Token;
