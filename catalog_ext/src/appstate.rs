//! App-state store for the custom filter data

use catalog_core::FilterSnapshot;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

const AVERAGE_RATING_KEY: &str = "AverageRatingValue";
const SUPPLIER_KEY: &str = "Supplier";

/// Custom-data mapping that survives navigation.
///
/// The filter extension owns only its two members; keys written by other
/// extensions are preserved untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    data: Map<String, Value>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    /// Write a snapshot's members into the store.
    ///
    /// The extension's members are replaced as a unit: members absent from
    /// the snapshot are removed, so a cleared filter does not resurrect on
    /// the next restore.
    pub fn write_snapshot(&mut self, snapshot: &FilterSnapshot) {
        self.data.remove(AVERAGE_RATING_KEY);
        self.data.remove(SUPPLIER_KEY);

        match serde_json::to_value(snapshot) {
            Ok(Value::Object(members)) => {
                self.data.extend(members);
            }
            Ok(_) | Err(_) => {
                debug!("Dropping unserializable filter snapshot from app state");
            }
        }
    }

    /// Read the stored snapshot.
    ///
    /// Missing keys yield absent members; malformed values are ignored.
    pub fn read_snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            average_rating: self.read_member(AVERAGE_RATING_KEY),
            suppliers: self.read_member(SUPPLIER_KEY),
        }
    }

    fn read_member<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.data.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(member) => Some(member),
            Err(error) => {
                debug!("Ignoring malformed app-state entry '{key}': {error}");
                None
            }
        }
    }
}
