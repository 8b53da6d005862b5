//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! reference data loaded once at startup; per-view state (facets, feeds)
//! lives in the components that own it.

use crate::models::{Category, Province};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full category list (no group filter), default offering for the
    /// filter bar.
    pub categories: Vec<Category>,
    /// Provinces for the location pickers.
    pub provinces: Vec<Province>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cached category list
pub fn store_set_categories(store: &AppStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

/// Replace the cached province list
pub fn store_set_provinces(store: &AppStore, provinces: Vec<Province>) {
    *store.provinces().write() = provinces;
}
