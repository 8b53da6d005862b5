//! Facet Selection State
//!
//! Ephemeral filter state owned by the marketplace view, mutated only
//! through these setters so cascading invariants always hold.

use crate::models::ItemKind;

/// Item-kind facet: show everything, wishes only, or offers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Wish,
    Offer,
}

impl KindFilter {
    pub fn matches(&self, kind: ItemKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Wish => kind == ItemKind::Wish,
            KindFilter::Offer => kind == ItemKind::Offer,
        }
    }
}

/// Coarse grouping deciding which category list is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryGroup {
    #[default]
    All,
    Products,
    Services,
}

impl CategoryGroup {
    /// Query-string value for the category listing endpoint.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            CategoryGroup::All => None,
            CategoryGroup::Products => Some("products"),
            CategoryGroup::Services => Some("services"),
        }
    }
}

/// Current facet selections for the marketplace list.
///
/// `search_text` holds the debounced query, not the raw input value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacetSelection {
    pub kind: KindFilter,
    pub group: CategoryGroup,
    pub category_id: Option<u32>,
    pub subcategory_id: Option<u32>,
    pub search_text: String,
}

impl FacetSelection {
    pub fn is_searching(&self) -> bool {
        !self.search_text.trim().is_empty()
    }

    pub fn set_kind(&mut self, kind: KindFilter) {
        self.kind = kind;
    }

    /// Switching the category group invalidates the category list on offer,
    /// so both category and subcategory are cleared with it.
    pub fn set_group(&mut self, group: CategoryGroup) {
        if self.group != group {
            self.group = group;
            self.category_id = None;
            self.subcategory_id = None;
        }
    }

    /// Selecting a new category always clears the subcategory
    /// (parent-selection-clears-child).
    pub fn set_category(&mut self, category_id: Option<u32>) {
        if self.category_id != category_id {
            self.category_id = category_id;
            self.subcategory_id = None;
        }
    }

    /// A subcategory is only meaningful under a selected category;
    /// the call is ignored otherwise.
    pub fn set_subcategory(&mut self, subcategory_id: Option<u32>) {
        if self.category_id.is_some() {
            self.subcategory_id = subcategory_id;
        }
    }

    pub fn set_search_text(&mut self, text: String) {
        self.search_text = text;
    }

    /// Reset every facet to its default in one state transition.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }
}

/// Cascading province → district → municipality selection, used by every
/// location picker in the portal's forms. Same invariant as the facets:
/// selecting a parent clears its children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationSelection {
    pub province_id: Option<u32>,
    pub district_id: Option<u32>,
    pub municipality_id: Option<u32>,
}

impl LocationSelection {
    pub fn set_province(&mut self, province_id: Option<u32>) {
        if self.province_id != province_id {
            self.province_id = province_id;
            self.district_id = None;
            self.municipality_id = None;
        }
    }

    pub fn set_district(&mut self, district_id: Option<u32>) {
        if self.province_id.is_none() {
            return;
        }
        if self.district_id != district_id {
            self.district_id = district_id;
            self.municipality_id = None;
        }
    }

    pub fn set_municipality(&mut self, municipality_id: Option<u32>) {
        if self.district_id.is_some() {
            self.municipality_id = municipality_id;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.province_id.is_some() && self.district_id.is_some() && self.municipality_id.is_some()
    }
}
