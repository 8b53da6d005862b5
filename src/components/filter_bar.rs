//! Filter Bar Component
//!
//! Kind tabs, category-group toggle, and the cascading category →
//! subcategory selects for the marketplace list. All facet mutations go
//! through `FacetSelection`'s setters so the cascading-clear invariant holds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::facet::{CategoryGroup, FacetSelection, KindFilter};
use crate::models::{Category, Subcategory};
use crate::store::{use_app_store, AppStateStoreFields};

/// Kind facet options
const KIND_OPTIONS: &[(KindFilter, &str)] = &[
    (KindFilter::All, "All"),
    (KindFilter::Wish, "Wishes"),
    (KindFilter::Offer, "Offers"),
];

/// Category group options
const GROUP_OPTIONS: &[(CategoryGroup, &str)] = &[
    (CategoryGroup::All, "All"),
    (CategoryGroup::Products, "Products"),
    (CategoryGroup::Services, "Services"),
];

fn parse_select(value: &str) -> Option<u32> {
    value.parse::<u32>().ok()
}

#[component]
pub fn FilterBar(facet: RwSignal<FacetSelection>, on_clear: Callback<()>) -> impl IntoView {
    let store = use_app_store();

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (subcategories, set_subcategories) = signal(Vec::<Subcategory>::new());

    // Offer the category list for the selected group. The full list is
    // cached in the store; group-scoped lists are fetched on demand.
    Effect::new(move |_| {
        let group = facet.with(|f| f.group);
        if group == CategoryGroup::All {
            set_categories.set(store.categories().get());
            return;
        }
        spawn_local(async move {
            match api::get_categories(group).await {
                Ok(list) => {
                    // Drop the response if the group moved on meanwhile.
                    if facet.with_untracked(|f| f.group) == group {
                        set_categories.set(list);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[FilterBar] Error loading categories: {}", e).into(),
                    );
                }
            }
        });
    });

    // Subcategories follow the selected category.
    Effect::new(move |_| {
        let category_id = facet.with(|f| f.category_id);
        let Some(id) = category_id else {
            set_subcategories.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::get_subcategories(id).await {
                Ok(list) => {
                    if facet.with_untracked(|f| f.category_id) == Some(id) {
                        set_subcategories.set(list);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[FilterBar] Error loading subcategories: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="filter-bar">
            <div class="kind-tabs">
                {KIND_OPTIONS.iter().map(|(kind, label)| {
                    let kind = *kind;
                    let is_active = move || facet.with(|f| f.kind) == kind;
                    view! {
                        <button
                            class=move || if is_active() { "kind-tab active" } else { "kind-tab" }
                            on:click=move |_| facet.update(|f| f.set_kind(kind))
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="group-toggle">
                {GROUP_OPTIONS.iter().map(|(group, label)| {
                    let group = *group;
                    let is_active = move || facet.with(|f| f.group) == group;
                    view! {
                        <button
                            class=move || if is_active() { "group-btn active" } else { "group-btn" }
                            on:click=move |_| facet.update(|f| f.set_group(group))
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <select
                class="category-select"
                prop:value=move || {
                    facet.with(|f| f.category_id).map_or(String::new(), |id| id.to_string())
                }
                on:change=move |ev| {
                    let selected = parse_select(&event_target_value(&ev));
                    facet.update(|f| f.set_category(selected));
                }
            >
                <option value="">"All categories"</option>
                <For
                    each=move || categories.get()
                    key=|c| c.id
                    children=move |c| {
                        view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                    }
                />
            </select>

            <Show when=move || facet.with(|f| f.category_id.is_some())>
                <select
                    class="subcategory-select"
                    prop:value=move || {
                        facet.with(|f| f.subcategory_id).map_or(String::new(), |id| id.to_string())
                    }
                    on:change=move |ev| {
                        let selected = parse_select(&event_target_value(&ev));
                        facet.update(|f| f.set_subcategory(selected));
                    }
                >
                    <option value="">"All subcategories"</option>
                    <For
                        each=move || subcategories.get()
                        key=|s| s.id
                        children=move |s| {
                            view! { <option value=s.id.to_string()>{s.name.clone()}</option> }
                        }
                    />
                </select>
            </Show>

            <Show when=move || facet.with(|f| f.has_active_filters())>
                <button class="clear-filters-btn" on:click=move |_| on_clear.run(())>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
