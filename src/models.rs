//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Which kind of marketplace item a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Wish,
    Offer,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Wish => "wish",
            ItemKind::Offer => "offer",
        }
    }
}

/// Product referenced by a wish. Older records carry their category only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: u32,
    pub name: String,
    pub category_id: Option<u32>,
    pub subcategory_id: Option<u32>,
}

/// Service referenced by an offer. Same legacy nesting as [`ProductRef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub id: u32,
    pub name: String,
    pub category_id: Option<u32>,
    pub subcategory_id: Option<u32>,
}

/// Wish item (someone looking for a product or service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<u32>,
    pub subcategory_id: Option<u32>,
    pub created_at: String,
    pub product: Option<ProductRef>,
}

/// Offer item (someone providing a product or service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category_id: Option<u32>,
    pub subcategory_id: Option<u32>,
    pub created_at: String,
    pub service: Option<ServiceRef>,
}

impl Wish {
    /// Category reference, checking the nested product for legacy records.
    pub fn resolved_category(&self) -> Option<u32> {
        self.category_id
            .or_else(|| self.product.as_ref().and_then(|p| p.category_id))
    }

    /// Subcategory reference, checking the nested product for legacy records.
    pub fn resolved_subcategory(&self) -> Option<u32> {
        self.subcategory_id
            .or_else(|| self.product.as_ref().and_then(|p| p.subcategory_id))
    }
}

impl Offer {
    /// Category reference, checking the nested service for legacy records.
    pub fn resolved_category(&self) -> Option<u32> {
        self.category_id
            .or_else(|| self.service.as_ref().and_then(|s| s.category_id))
    }

    /// Subcategory reference, checking the nested service for legacy records.
    pub fn resolved_subcategory(&self) -> Option<u32> {
        self.subcategory_id
            .or_else(|| self.service.as_ref().and_then(|s| s.subcategory_id))
    }
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Subcategory data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: u32,
    pub category_id: u32,
    pub name: String,
}

/// One page of a server-paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub results: Vec<T>,
    /// URL of the next page; `None` on the last page.
    pub next: Option<String>,
}

impl<T> Paginated<T> {
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// Combined search response, both kinds, unfiltered by facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub wishes: Vec<Wish>,
    pub offers: Vec<Offer>,
}

// ========================
// Locations (cascading pickers)
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: u32,
    pub province_id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: u32,
    pub district_id: u32,
    pub name: String,
}

/// Graduate roster registration payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduateRegistration {
    pub full_name: String,
    pub email: String,
    pub province_id: u32,
    pub district_id: u32,
    pub municipality_id: u32,
}
