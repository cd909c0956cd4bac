//! Filter-bar extension for the catalog list report.
//!
//! Wires the custom supplier and average-rating filter controls into the
//! table's query binding, persists their state across navigation, and
//! manages the supplier selection dialog.

mod appstate;
mod binding;
mod controls;
mod dialog;
mod extension;

pub use appstate::AppState;
pub use binding::QueryBinding;
pub use controls::{FilterBar, FilterControl, RatingField, TokenField};
pub use dialog::SupplierDialog;
pub use extension::{ListFilterExtension, SUPPLIER_FIELD};
