//! Wish/Offer Marketplace Content
//!
//! The aggregation point for the marketplace list: owns the facet
//! selection, both paginated feeds, and the search overlay, and derives the
//! displayable listing sequence from exactly one of the two fetch paths.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{FilterBar, ItemCard, SearchInput};
use crate::config::SCROLL_FETCH_THRESHOLD_PX;
use crate::context::use_app_context;
use crate::facet::FacetSelection;
use crate::models::{Offer, Wish};
use crate::paging::{FeedKey, PageFeed};
use crate::resolver::{resolve, FeedSource, Listing};
use crate::search::SearchOverlay;

#[component]
pub fn WishOfferContent() -> impl IntoView {
    let ctx = use_app_context();

    let facet = RwSignal::new(FacetSelection::default());
    let wish_feed = RwSignal::new(PageFeed::<Wish>::default());
    let offer_feed = RwSignal::new(PageFeed::<Offer>::default());
    let overlay = RwSignal::new(SearchOverlay::default());

    let (search_raw, set_search_raw) = signal(String::new());
    let (search_query, set_search_query) = signal(String::new());

    let fetch_wishes = move || {
        let Some(request) = wish_feed.try_update(|f| f.begin_fetch()).flatten() else {
            return;
        };
        spawn_local(async move {
            let key = request.key;
            match api::get_wishes(key.category_id, key.subcategory_id, request.page).await {
                Ok(page) => {
                    let has_more = page.has_more();
                    wish_feed.update(|f| {
                        f.apply(request, page.results, has_more);
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[WishOffer] Error loading wishes: {}", e).into(),
                    );
                    wish_feed.update(|f| f.fail(request));
                    ctx.notify("Could not load wishes. Showing what we have.");
                }
            }
        });
    };

    let fetch_offers = move || {
        let Some(request) = offer_feed.try_update(|f| f.begin_fetch()).flatten() else {
            return;
        };
        spawn_local(async move {
            let key = request.key;
            match api::get_offers(key.category_id, key.subcategory_id, request.page).await {
                Ok(page) => {
                    let has_more = page.has_more();
                    offer_feed.update(|f| {
                        f.apply(request, page.results, has_more);
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[WishOffer] Error loading offers: {}", e).into(),
                    );
                    offer_feed.update(|f| f.fail(request));
                    ctx.notify("Could not load offers. Showing what we have.");
                }
            }
        });
    };

    // Category/subcategory are the only facets the server filters by; a
    // change there restarts both feeds. Kind and search are client-side and
    // leave the page data alone.
    let feed_key = Memo::new(move |_| {
        facet.with(|f| FeedKey {
            category_id: f.category_id,
            subcategory_id: f.subcategory_id,
        })
    });

    Effect::new(move |_| {
        let key = feed_key.get();
        wish_feed.update(|f| f.reset(key));
        offer_feed.update(|f| f.reset(key));
        fetch_wishes();
        fetch_offers();
    });

    // Debounced query changes drive the search overlay.
    Effect::new(move |_| {
        let text = search_query.get();
        facet.update(|f| f.set_search_text(text.clone()));
        let Some(query) = overlay.try_update(|o| o.begin_search(&text)).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::search(&query).await {
                Ok(results) => {
                    overlay.update(|o| {
                        o.apply(&query, results);
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[WishOffer] Search failed: {}", e).into(),
                    );
                    overlay.update(|o| o.fail(&query));
                    ctx.notify("Search is unavailable right now.");
                }
            }
        });
    });

    // Exactly one source feeds a render: search overlay while a query is
    // active, the paginated feeds otherwise.
    let listings = Memo::new(move |_| {
        let f = facet.get();
        if f.is_searching() {
            overlay.with(|o| {
                let results = o.results();
                resolve(
                    FeedSource::Search {
                        wishes: &results.wishes,
                        offers: &results.offers,
                    },
                    &f,
                )
            })
        } else {
            wish_feed.with(|wf| {
                offer_feed.with(|of| {
                    resolve(
                        FeedSource::Pages {
                            wishes: wf.items(),
                            offers: of.items(),
                        },
                        &f,
                    )
                })
            })
        }
    });

    let is_loading = move || {
        wish_feed.with(|f| f.is_loading())
            || offer_feed.with(|f| f.is_loading())
            || overlay.with(|o| o.is_loading())
    };

    // Infinite-scroll gate: near the bottom, no search active, and
    // begin_fetch itself refuses while loading or exhausted.
    let on_scroll = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(el) = target.dyn_ref::<web_sys::Element>() else {
            return;
        };
        let remaining = el.scroll_height() - el.scroll_top() - el.client_height();
        if f64::from(remaining) > SCROLL_FETCH_THRESHOLD_PX {
            return;
        }
        if facet.with_untracked(|f| f.is_searching()) {
            return;
        }
        fetch_wishes();
        fetch_offers();
    };

    let clear_all = move |_: ()| {
        set_search_raw.set(String::new());
        set_search_query.set(String::new());
        facet.update(|f| f.clear_all());
    };

    view! {
        <section class="wish-offer-content">
            <SearchInput raw=search_raw set_raw=set_search_raw set_query=set_search_query />
            <FilterBar facet=facet on_clear=Callback::new(clear_all) />

            <div class="item-list" on:scroll=on_scroll>
                <For
                    each=move || listings.get()
                    key=|listing: &Listing| listing.display_key()
                    children=move |listing| view! { <ItemCard listing=listing /> }
                />

                <Show when=move || !is_loading() && listings.with(|l| l.is_empty())>
                    <div class="empty-state">"Nothing here yet."</div>
                </Show>

                <Show when=is_loading>
                    <div class="loading">"Loading..."</div>
                </Show>
            </div>
        </section>
    }
}
