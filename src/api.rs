//! REST API Bindings
//!
//! Thin async wrappers over the backend endpoints. No retry policy here:
//! failures surface as [`ApiError`] and the caller decides what to keep
//! showing.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{API_BASE, PAGE_SIZE};
use crate::facet::CategoryGroup;
use crate::models::{
    Category, District, GraduateRegistration, Municipality, Offer, Paginated, Province,
    SearchResults, Subcategory, Wish,
};

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Http(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, ApiError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Query string for the paginated item endpoints. Subcategory takes
/// precedence over category; the server ignores a category when a
/// subcategory is present, so only one is ever sent.
fn page_query(category_id: Option<u32>, subcategory_id: Option<u32>, page: u32) -> String {
    let mut query = format!("page={}&page_size={}", page, PAGE_SIZE);
    if let Some(sub) = subcategory_id {
        query.push_str(&format!("&subcategory={}", sub));
    } else if let Some(cat) = category_id {
        query.push_str(&format!("&category={}", cat));
    }
    query
}

// ========================
// Marketplace Items
// ========================

pub async fn get_wishes(
    category_id: Option<u32>,
    subcategory_id: Option<u32>,
    page: u32,
) -> Result<Paginated<Wish>, ApiError> {
    let query = page_query(category_id, subcategory_id, page);
    get_json(format!("{}/wishes/?{}", API_BASE, query)).await
}

pub async fn get_offers(
    category_id: Option<u32>,
    subcategory_id: Option<u32>,
    page: u32,
) -> Result<Paginated<Offer>, ApiError> {
    let query = page_query(category_id, subcategory_id, page);
    get_json(format!("{}/offers/?{}", API_BASE, query)).await
}

/// Combined search across both kinds, unfiltered by facet.
pub async fn search(query: &str) -> Result<SearchResults, ApiError> {
    let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
    get_json(format!("{}/search/?q={}", API_BASE, encoded)).await
}

// ========================
// Categories
// ========================

pub async fn get_categories(group: CategoryGroup) -> Result<Vec<Category>, ApiError> {
    let url = match group.query_value() {
        Some(value) => format!("{}/categories/?group={}", API_BASE, value),
        None => format!("{}/categories/", API_BASE),
    };
    get_json(url).await
}

pub async fn get_subcategories(category_id: u32) -> Result<Vec<Subcategory>, ApiError> {
    get_json(format!("{}/categories/?category={}", API_BASE, category_id)).await
}

// ========================
// Locations
// ========================

pub async fn get_provinces() -> Result<Vec<Province>, ApiError> {
    get_json(format!("{}/provinces/", API_BASE)).await
}

pub async fn get_districts(province_id: u32) -> Result<Vec<District>, ApiError> {
    get_json(format!("{}/districts/?province={}", API_BASE, province_id)).await
}

pub async fn get_municipalities(district_id: u32) -> Result<Vec<Municipality>, ApiError> {
    get_json(format!("{}/municipalities/?district={}", API_BASE, district_id)).await
}

// ========================
// Graduate Roster
// ========================

pub async fn register_graduate(registration: &GraduateRegistration) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/graduates/", API_BASE))
        .json(registration)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategory_takes_precedence_in_page_query() {
        let q = page_query(Some(7), Some(42), 2);
        assert!(q.contains("subcategory=42"));
        assert!(!q.contains("category=7"));
        assert!(q.starts_with("page=2"));
    }

    #[test]
    fn test_category_only_page_query() {
        let q = page_query(Some(7), None, 1);
        assert!(q.contains("&category=7"));
        assert!(!q.contains("subcategory"));
    }

    #[test]
    fn test_unfiltered_page_query() {
        let q = page_query(None, None, 3);
        assert_eq!(q, format!("page=3&page_size={}", PAGE_SIZE));
    }
}
