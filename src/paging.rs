//! Paginated Feed State
//!
//! Tracks one server-paginated collection (one item kind): accumulated
//! items, the next page to request, and an in-flight flag. Requests are
//! issued through [`PageFeed::begin_fetch`] and answered through
//! [`PageFeed::apply`], which discards stale responses: anything issued
//! before the last [`PageFeed::reset`] or for a different page.

/// Facet values a feed was opened for. Requests carry a copy so a late
/// response can be matched against the feed's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedKey {
    pub category_id: Option<u32>,
    pub subcategory_id: Option<u32>,
}

/// Token identifying one in-flight page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub key: FeedKey,
    pub page: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
pub struct PageFeed<T> {
    items: Vec<T>,
    key: FeedKey,
    next_page: u32,
    has_more: bool,
    loading: bool,
    /// Bumped on every reset; stale responses carry an older value.
    generation: u32,
}

impl<T> Default for PageFeed<T> {
    fn default() -> Self {
        Self::new(FeedKey::default())
    }
}

impl<T> PageFeed<T> {
    pub fn new(key: FeedKey) -> Self {
        Self {
            items: Vec::new(),
            key,
            next_page: 1,
            has_more: true,
            loading: false,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn key(&self) -> FeedKey {
        self.key
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Drop accumulated pages and start over for a new facet key. Any
    /// response to a request issued before this call will be discarded.
    pub fn reset(&mut self, key: FeedKey) {
        self.items.clear();
        self.key = key;
        self.next_page = 1;
        self.has_more = true;
        self.loading = false;
        self.generation += 1;
    }

    /// Claim the next page request, or `None` when one is already in flight
    /// or the collection is exhausted. Pages are requested strictly in
    /// order: page N+1 is never claimable before page N's response landed.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        Some(PageRequest {
            key: self.key,
            page: self.next_page,
            generation: self.generation,
        })
    }

    /// Append a page response. Returns `false` (and changes nothing) when
    /// the request token is stale.
    pub fn apply(&mut self, request: PageRequest, mut items: Vec<T>, has_more: bool) -> bool {
        if request.generation != self.generation || request.page != self.next_page {
            return false;
        }
        self.items.append(&mut items);
        self.next_page += 1;
        self.has_more = has_more;
        self.loading = false;
        true
    }

    /// Record a failed fetch: clears the in-flight flag, keeps whatever was
    /// fetched before (stale-but-displayed beats flashing an empty list).
    pub fn fail(&mut self, request: PageRequest) {
        if request.generation == self.generation {
            self.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(category_id: Option<u32>, subcategory_id: Option<u32>) -> FeedKey {
        FeedKey { category_id, subcategory_id }
    }

    #[test]
    fn test_pages_append_in_order() {
        let mut feed: PageFeed<u32> = PageFeed::default();

        let req = feed.begin_fetch().expect("first page claimable");
        assert_eq!(req.page, 1);
        assert!(feed.apply(req, vec![1, 2, 3], true));

        let req = feed.begin_fetch().expect("second page claimable");
        assert_eq!(req.page, 2);
        assert!(feed.apply(req, vec![4, 5], false));

        assert_eq!(feed.items(), &[1, 2, 3, 4, 5]);
        assert!(!feed.has_more());
    }

    #[test]
    fn test_no_second_request_while_loading() {
        let mut feed: PageFeed<u32> = PageFeed::default();
        let _req = feed.begin_fetch().expect("claimable");
        assert!(feed.begin_fetch().is_none());
    }

    #[test]
    fn test_exhausted_feed_stops_fetching() {
        let mut feed: PageFeed<u32> = PageFeed::default();
        let req = feed.begin_fetch().unwrap();
        feed.apply(req, vec![1], false);
        assert!(feed.begin_fetch().is_none());
    }

    #[test]
    fn test_stale_response_after_reset_is_discarded() {
        let mut feed: PageFeed<u32> = PageFeed::new(key(Some(3), None));
        let stale = feed.begin_fetch().unwrap();

        // Facet changes while the request is in flight.
        feed.reset(key(Some(7), None));
        assert!(!feed.apply(stale, vec![99], true));
        assert!(feed.items().is_empty());

        // The new facet's own fetch proceeds normally.
        let fresh = feed.begin_fetch().unwrap();
        assert!(feed.apply(fresh, vec![1], true));
        assert_eq!(feed.items(), &[1]);
    }

    #[test]
    fn test_stale_response_after_reset_to_same_key_is_discarded() {
        let mut feed: PageFeed<u32> = PageFeed::new(key(Some(3), None));
        let stale = feed.begin_fetch().unwrap();

        // Forced refresh with identical facet values still invalidates.
        feed.reset(key(Some(3), None));
        assert!(!feed.apply(stale, vec![99], true));
        assert!(feed.items().is_empty());
    }

    #[test]
    fn test_failure_keeps_prior_items() {
        let mut feed: PageFeed<u32> = PageFeed::default();
        let req = feed.begin_fetch().unwrap();
        feed.apply(req, vec![1, 2], true);

        let req = feed.begin_fetch().unwrap();
        feed.fail(req);
        assert_eq!(feed.items(), &[1, 2]);
        assert!(!feed.is_loading());
        // Retry is possible.
        assert!(feed.begin_fetch().is_some());
    }

    #[test]
    fn test_stale_failure_does_not_clear_new_loading_flag() {
        let mut feed: PageFeed<u32> = PageFeed::default();
        let stale = feed.begin_fetch().unwrap();
        feed.reset(FeedKey::default());
        let _fresh = feed.begin_fetch().unwrap();

        feed.fail(stale);
        assert!(feed.is_loading());
    }
}
