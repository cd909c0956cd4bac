//! Lifecycle hooks wiring the custom filter controls into the list report

use catalog_core::{
    AVERAGE_RATING_FIELD, FieldId, FilterSnapshot, Supplier, Token, rating_to_condition,
    tokens_to_conditions,
};
use log::debug;

use crate::appstate::AppState;
use crate::binding::QueryBinding;
use crate::controls::FilterBar;
use crate::dialog::SupplierDialog;

/// Key of the supplier multi-select in the filter bar
pub const SUPPLIER_FIELD: &str = "supplier_ID";

/// The custom-filter extension of the catalog list report.
///
/// Holds the keys of the two custom controls and implements the hooks the
/// host invokes around table rebinds, app-state saves and restores, and
/// the supplier selection dialog. A missing or differently-typed control
/// makes the affected hook a no-op.
#[derive(Debug, Clone)]
pub struct ListFilterExtension {
    supplier_key: String,
    rating_key: String,
}

impl Default for ListFilterExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl ListFilterExtension {
    /// Create an extension using the default control keys
    pub fn new() -> Self {
        Self {
            supplier_key: SUPPLIER_FIELD.to_string(),
            rating_key: AVERAGE_RATING_FIELD.to_string(),
        }
    }

    /// Use a different key for the supplier multi-select.
    ///
    /// The key doubles as the query field name the supplier conditions
    /// filter on.
    pub fn with_supplier_key(mut self, key: impl Into<String>) -> Self {
        self.supplier_key = key.into();
        self
    }

    /// Use a different key for the rating indicator
    pub fn with_rating_key(mut self, key: impl Into<String>) -> Self {
        self.rating_key = key.into();
        self
    }

    /// Contribute the custom filter conditions to the outbound request.
    ///
    /// Supplier conditions come first, in selection order, followed by the
    /// rating range condition when a rating is selected.
    pub fn before_rebind(&self, bar: &FilterBar, binding: &mut QueryBinding) {
        if let Some(field) = bar.token_field(&self.supplier_key) {
            let conditions =
                tokens_to_conditions(field.tokens(), &FieldId::new(self.supplier_key.as_str()));
            if !conditions.is_empty() {
                debug!("Adding {} supplier conditions to the table binding", conditions.len());
                binding.extend_filters(conditions);
            }
        }

        if let Some(field) = bar.rating_field(&self.rating_key) {
            if let Some(condition) = rating_to_condition(Some(field.value())) {
                debug!("Adding average-rating condition to the table binding");
                binding.push_filter(condition);
            }
        }
    }

    /// Store the custom filter values in the app state.
    ///
    /// The rating is captured whenever its control exists, including a
    /// value of 0; suppliers only when tokens are selected.
    pub fn save_state(&self, bar: &FilterBar, state: &mut AppState) {
        let rating = bar.rating_field(&self.rating_key).map(|field| field.value());
        let tokens = bar
            .token_field(&self.supplier_key)
            .map(|field| field.tokens().to_vec())
            .unwrap_or_default();

        state.write_snapshot(&FilterSnapshot::capture(rating, &tokens));
    }

    /// Restore the custom filter values from the app state.
    ///
    /// Members absent from the stored snapshot leave the controls
    /// untouched, as does a stored supplier list that is empty.
    pub fn restore_state(&self, bar: &mut FilterBar, state: &AppState) {
        let snapshot = state.read_snapshot();

        if let Some(rating) = snapshot.average_rating {
            if let Some(field) = bar.rating_field_mut(&self.rating_key) {
                debug!("Restoring average rating {rating}");
                field.set_value(rating);
            }
        }

        if snapshot.suppliers.is_some() {
            let tokens = snapshot.tokens();
            if !tokens.is_empty() {
                if let Some(field) = bar.token_field_mut(&self.supplier_key) {
                    debug!("Restoring {} supplier tokens", tokens.len());
                    field.set_tokens(tokens);
                }
            }
        }
    }

    /// Filter the dialog's supplier list by display name
    pub fn dialog_search(&self, dialog: &mut SupplierDialog, term: &str) {
        dialog.search(term);
    }

    /// Replace the supplier selection with the dialog's confirmed records.
    ///
    /// An empty confirmation clears the selection.
    pub fn dialog_confirmed(&self, bar: &mut FilterBar, selection: &[Supplier]) {
        let tokens: Vec<Token> = selection.iter().map(Supplier::to_token).collect();

        if let Some(field) = bar.token_field_mut(&self.supplier_key) {
            debug!("Setting {} supplier tokens from dialog selection", tokens.len());
            field.set_tokens(tokens);
        }
    }
}
