//! Search Overlay State
//!
//! Holds the combined (both kinds) results for the current debounced query.
//! Responses are keyed by the query text captured at request time, so an
//! overlapping earlier request can never overwrite a later one
//! (last-write-wins). Debouncing itself happens in the search input
//! component; this module only sees settled query values.

use crate::models::SearchResults;

#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    results: SearchResults,
    /// Trimmed query currently in effect; empty means no search active.
    active_query: String,
    loading: bool,
}

impl SearchOverlay {
    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while a non-empty query is in effect, even before its response
    /// has arrived.
    pub fn is_active(&self) -> bool {
        !self.active_query.is_empty()
    }

    /// Adopt a new debounced query. Returns the query string to fetch, or
    /// `None` when the trimmed text is empty, in which case the overlay is
    /// cleared wholesale and the paged feeds resume.
    pub fn begin_search(&mut self, text: &str) -> Option<String> {
        let query = text.trim().to_string();
        if query == self.active_query {
            return None;
        }
        self.active_query = query.clone();
        if query.is_empty() {
            self.results = SearchResults::default();
            self.loading = false;
            return None;
        }
        self.loading = true;
        Some(query)
    }

    /// Install a response. Returns `false` (and changes nothing) when the
    /// query is no longer the active one.
    pub fn apply(&mut self, query: &str, results: SearchResults) -> bool {
        if query != self.active_query {
            return false;
        }
        self.results = results;
        self.loading = false;
        true
    }

    /// Record a failed search: clears the in-flight flag, keeps the prior
    /// results displayed.
    pub fn fail(&mut self, query: &str) {
        if query == self.active_query {
            self.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wish;

    fn make_wish(id: u32) -> Wish {
        Wish {
            id,
            title: format!("Wish {}", id),
            description: None,
            image: None,
            category_id: None,
            subcategory_id: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            product: None,
        }
    }

    fn results_with(ids: &[u32]) -> SearchResults {
        SearchResults {
            wishes: ids.iter().copied().map(make_wish).collect(),
            offers: vec![],
        }
    }

    #[test]
    fn test_empty_text_clears_overlay() {
        let mut overlay = SearchOverlay::default();
        let query = overlay.begin_search("pump").expect("query issued");
        overlay.apply(&query, results_with(&[1]));
        assert!(overlay.is_active());

        assert!(overlay.begin_search("   ").is_none());
        assert!(!overlay.is_active());
        assert!(overlay.results().wishes.is_empty());
    }

    #[test]
    fn test_unchanged_query_is_not_refetched() {
        let mut overlay = SearchOverlay::default();
        assert!(overlay.begin_search("pump").is_some());
        assert!(overlay.begin_search(" pump ").is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut overlay = SearchOverlay::default();
        let old = overlay.begin_search("pum").expect("query issued");
        let new = overlay.begin_search("pump").expect("query issued");

        // Old response arrives after the query moved on.
        assert!(!overlay.apply(&old, results_with(&[99])));
        assert!(overlay.apply(&new, results_with(&[1])));
        assert_eq!(overlay.results().wishes.len(), 1);
        assert_eq!(overlay.results().wishes[0].id, 1);
    }

    #[test]
    fn test_results_replaced_wholesale() {
        let mut overlay = SearchOverlay::default();
        let q1 = overlay.begin_search("pump").unwrap();
        overlay.apply(&q1, results_with(&[1, 2]));

        let q2 = overlay.begin_search("pumps").unwrap();
        overlay.apply(&q2, results_with(&[3]));
        let ids: Vec<u32> = overlay.results().wishes.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_failure_keeps_prior_results() {
        let mut overlay = SearchOverlay::default();
        let q1 = overlay.begin_search("pump").unwrap();
        overlay.apply(&q1, results_with(&[1]));

        let q2 = overlay.begin_search("pumps").unwrap();
        overlay.fail(&q2);
        assert!(!overlay.is_loading());
        assert_eq!(overlay.results().wishes.len(), 1);
    }
}
