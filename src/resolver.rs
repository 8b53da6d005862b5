//! Facet Resolver
//!
//! Pure merge/filter step between the fetch layers and the view: tags items
//! with their kind, concatenates them in stable order (wishes first), applies
//! the active facets, and de-duplicates by display key.
//!
//! Category filtering only runs on the search path. Paged data arrives
//! already filtered server-side and must not be re-filtered here: the client
//! cannot see every category nesting shape the backend can, and re-filtering
//! would silently drop legitimately-matching items.

use std::collections::HashSet;

use crate::facet::FacetSelection;
use crate::models::{ItemKind, Offer, Wish};

/// A kind-tagged marketplace card ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub kind: ItemKind,
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: String,
    /// Category reference resolved through legacy nesting, if any.
    pub category: Option<u32>,
    /// Subcategory reference resolved through legacy nesting, if any.
    pub subcategory: Option<u32>,
}

impl Listing {
    /// Unique display key, e.g. `"wish-17"`. IDs are only unique per kind.
    pub fn display_key(&self) -> String {
        format!("{}-{}", self.kind.as_str(), self.id)
    }
}

impl From<&Wish> for Listing {
    fn from(w: &Wish) -> Self {
        Listing {
            kind: ItemKind::Wish,
            id: w.id,
            title: w.title.clone(),
            description: w.description.clone(),
            image: w.image.clone(),
            created_at: w.created_at.clone(),
            category: w.resolved_category(),
            subcategory: w.resolved_subcategory(),
        }
    }
}

impl From<&Offer> for Listing {
    fn from(o: &Offer) -> Self {
        Listing {
            kind: ItemKind::Offer,
            id: o.id,
            title: o.title.clone(),
            description: o.description.clone(),
            image: o.image.clone(),
            created_at: o.created_at.clone(),
            category: o.resolved_category(),
            subcategory: o.resolved_subcategory(),
        }
    }
}

/// Which fetch path feeds the current render. Exactly one is active at a
/// time; the enum makes concatenating both paths unrepresentable.
#[derive(Debug, Clone, Copy)]
pub enum FeedSource<'a> {
    /// Server-paginated, server-filtered collections (no search active).
    Pages {
        wishes: &'a [Wish],
        offers: &'a [Offer],
    },
    /// Search overlay results, unfiltered by facet.
    Search {
        wishes: &'a [Wish],
        offers: &'a [Offer],
    },
}

/// Compute the displayable listing sequence for the current render.
pub fn resolve(source: FeedSource<'_>, facet: &FacetSelection) -> Vec<Listing> {
    let (wishes, offers, filter_categories) = match source {
        FeedSource::Pages { wishes, offers } => (wishes, offers, false),
        FeedSource::Search { wishes, offers } => (wishes, offers, true),
    };

    // Stable order: wishes before offers, each in arrival order.
    let mut listings: Vec<Listing> = wishes
        .iter()
        .map(Listing::from)
        .chain(offers.iter().map(Listing::from))
        .collect();

    listings.retain(|l| facet.kind.matches(l.kind));

    if filter_categories {
        if let Some(sub) = facet.subcategory_id {
            // Subcategory takes precedence; items with no resolvable
            // subcategory reference are dropped.
            listings.retain(|l| l.subcategory == Some(sub));
        } else if let Some(cat) = facet.category_id {
            // Items with no resolvable category path are kept: dropping them
            // here over-filters legacy records.
            listings.retain(|l| match l.category {
                Some(c) => c == cat,
                None => true,
            });
        }
    }

    // De-duplicate by (kind, id), first occurrence wins.
    let mut seen = HashSet::new();
    listings.retain(|l| seen.insert((l.kind, l.id)));
    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::KindFilter;
    use crate::models::{ProductRef, ServiceRef};

    fn make_wish(id: u32, category: Option<u32>, subcategory: Option<u32>) -> Wish {
        Wish {
            id,
            title: format!("Wish {}", id),
            description: None,
            image: None,
            category_id: category,
            subcategory_id: subcategory,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            product: None,
        }
    }

    fn make_offer(id: u32, category: Option<u32>, subcategory: Option<u32>) -> Offer {
        Offer {
            id,
            title: format!("Offer {}", id),
            description: None,
            image: None,
            category_id: category,
            subcategory_id: subcategory,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            service: None,
        }
    }

    #[test]
    fn test_pages_concatenate_wishes_then_offers() {
        let wishes = vec![make_wish(1, None, None), make_wish(2, None, None), make_wish(3, None, None)];
        let offers = vec![make_offer(1, None, None), make_offer(2, None, None)];

        let out = resolve(
            FeedSource::Pages { wishes: &wishes, offers: &offers },
            &FacetSelection::default(),
        );

        let keys: Vec<String> = out.iter().map(|l| l.display_key()).collect();
        assert_eq!(keys, vec!["wish-1", "wish-2", "wish-3", "offer-1", "offer-2"]);
    }

    #[test]
    fn test_kind_filter_drops_other_kind() {
        let wishes = vec![make_wish(1, None, None)];
        let offers = vec![make_offer(1, None, None), make_offer(2, None, None)];

        let mut facet = FacetSelection::default();
        facet.set_kind(KindFilter::Wish);

        let out = resolve(FeedSource::Pages { wishes: &wishes, offers: &offers }, &facet);
        assert!(out.iter().all(|l| l.kind == ItemKind::Wish));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_pages_are_not_refiltered_by_category() {
        // Server already applied the category filter; a mismatching record
        // coming back on the paged path must survive.
        let wishes = vec![make_wish(1, Some(9), None)];
        let offers = vec![];

        let mut facet = FacetSelection::default();
        facet.set_category(Some(7));

        let out = resolve(FeedSource::Pages { wishes: &wishes, offers: &offers }, &facet);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_search_filters_by_category() {
        let wishes = vec![make_wish(1, Some(7), None)];
        let offers = vec![make_offer(1, Some(9), None)];

        let mut facet = FacetSelection::default();
        facet.set_category(Some(7));
        facet.set_search_text("pump".to_string());

        let out = resolve(FeedSource::Search { wishes: &wishes, offers: &offers }, &facet);
        let keys: Vec<String> = out.iter().map(|l| l.display_key()).collect();
        assert_eq!(keys, vec!["wish-1"]);
    }

    #[test]
    fn test_search_category_filter_keeps_uncategorized() {
        let wishes = vec![make_wish(1, None, None), make_wish(2, Some(9), None)];
        let offers = vec![];

        let mut facet = FacetSelection::default();
        facet.set_category(Some(7));
        facet.set_search_text("pump".to_string());

        let out = resolve(FeedSource::Search { wishes: &wishes, offers: &offers }, &facet);
        // Uncategorized wish 1 is kept, mismatching wish 2 dropped.
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn test_search_subcategory_filter_drops_unresolvable() {
        let wishes = vec![
            make_wish(1, Some(7), Some(42)),
            make_wish(2, Some(7), None),
            make_wish(3, Some(7), Some(43)),
        ];
        let offers = vec![];

        let mut facet = FacetSelection::default();
        facet.set_category(Some(7));
        facet.set_subcategory(Some(42));
        facet.set_search_text("pump".to_string());

        let out = resolve(FeedSource::Search { wishes: &wishes, offers: &offers }, &facet);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);
    }

    #[test]
    fn test_legacy_nested_category_is_resolved() {
        let mut wish = make_wish(1, None, None);
        wish.product = Some(ProductRef {
            id: 5,
            name: "Pump".to_string(),
            category_id: Some(7),
            subcategory_id: None,
        });
        let mut offer = make_offer(1, None, None);
        offer.service = Some(ServiceRef {
            id: 6,
            name: "Repair".to_string(),
            category_id: Some(9),
            subcategory_id: None,
        });

        let wishes = vec![wish];
        let offers = vec![offer];

        let mut facet = FacetSelection::default();
        facet.set_category(Some(7));
        facet.set_search_text("pump".to_string());

        let out = resolve(FeedSource::Search { wishes: &wishes, offers: &offers }, &facet);
        let keys: Vec<String> = out.iter().map(|l| l.display_key()).collect();
        assert_eq!(keys, vec!["wish-1"]);
    }

    #[test]
    fn test_no_duplicate_display_keys() {
        // Same id in both kinds is fine; a repeated id within a kind is not.
        let wishes = vec![make_wish(1, None, None), make_wish(1, None, None)];
        let offers = vec![make_offer(1, None, None)];

        let out = resolve(
            FeedSource::Pages { wishes: &wishes, offers: &offers },
            &FacetSelection::default(),
        );

        let mut keys: Vec<String> = out.iter().map(|l| l.display_key()).collect();
        assert_eq!(keys, vec!["wish-1", "offer-1"]);
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), out.len());
    }

    #[test]
    fn test_empty_inputs_yield_empty_output() {
        let out = resolve(
            FeedSource::Search { wishes: &[], offers: &[] },
            &FacetSelection::default(),
        );
        assert!(out.is_empty());
    }
}
