//! Supplier selection dialog

use catalog_core::{FieldId, FieldValue, FilterCondition, Supplier};
use log::debug;

/// Modal supplier picker owned by the hosting view.
///
/// The dialog holds the full supplier catalog; `search` narrows what is
/// visible, and `confirm` resolves the chosen ids, resets the search, and
/// closes the dialog again.
#[derive(Debug, Clone)]
pub struct SupplierDialog {
    items: Vec<Supplier>,
    search_term: String,
    open: bool,
}

impl SupplierDialog {
    /// Create a closed dialog over the given supplier catalog
    pub fn new(items: Vec<Supplier>) -> Self {
        Self {
            items,
            search_term: String::new(),
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dialog and reset the search filter
    pub fn close(&mut self) {
        self.open = false;
        self.search_term.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Narrow the visible items to names containing the term.
    ///
    /// An empty term shows the full catalog again.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Items admitted by the current search, in catalog order
    pub fn visible(&self) -> Vec<&Supplier> {
        if self.search_term.is_empty() {
            return self.items.iter().collect();
        }

        let condition = FilterCondition::contains(FieldId::new("name"), self.search_term.as_str());
        self.items
            .iter()
            .filter(|supplier| {
                condition
                    .matches(&FieldValue::String(supplier.name.clone()))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Confirm a selection by supplier id.
    ///
    /// Unknown ids are skipped. Confirming resets the search filter and
    /// closes the dialog. An empty selection is a valid confirmation and
    /// yields an empty list.
    pub fn confirm(&mut self, selected_ids: &[&str]) -> Vec<Supplier> {
        let selection: Vec<Supplier> = selected_ids
            .iter()
            .filter_map(|id| self.items.iter().find(|supplier| supplier.id == *id))
            .cloned()
            .collect();

        debug!(
            "Supplier dialog confirmed with {} of {} requested ids",
            selection.len(),
            selected_ids.len()
        );
        self.close();

        selection
    }
}
