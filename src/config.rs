//! Frontend Configuration
//!
//! Compile-time constants for the API origin and list-view tuning.

/// Base path of the backend REST API.
pub const API_BASE: &str = "/api/v1";

/// Debounce interval for the marketplace search input, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Page size requested from the paginated wish/offer endpoints.
pub const PAGE_SIZE: u32 = 12;

/// How close to the bottom (in pixels) the list scroll position must be
/// before the next page is requested.
pub const SCROLL_FETCH_THRESHOLD_PX: f64 = 320.0;
