//! Wish/Offer Portal App
//!
//! Root component: loads reference data, provides context, and switches
//! between the marketplace and the graduate registration page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{RegisterForm, ToastTray, WishOfferContent};
use crate::context::{AppContext, Toast};
use crate::facet::CategoryGroup;
use crate::store::{store_set_categories, store_set_provinces, AppState, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Marketplace,
    Register,
}

#[component]
pub fn App() -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (page, set_page) = signal(Page::Marketplace);

    provide_context(AppContext::new((toasts, set_toasts)));

    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    // Reference data, fetched once on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_categories(CategoryGroup::All).await {
                Ok(categories) => {
                    web_sys::console::log_1(
                        &format!("[App] Loaded {} categories", categories.len()).into(),
                    );
                    store_set_categories(&store, categories);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[App] Error loading categories: {}", e).into(),
                    );
                }
            }
            if let Ok(provinces) = api::get_provinces().await {
                store_set_provinces(&store, provinces);
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Wish & Offer"</h1>
                <nav>
                    <button
                        class=move || {
                            if page.get() == Page::Marketplace { "nav-tab active" } else { "nav-tab" }
                        }
                        on:click=move |_| set_page.set(Page::Marketplace)
                    >
                        "Marketplace"
                    </button>
                    <button
                        class=move || {
                            if page.get() == Page::Register { "nav-tab active" } else { "nav-tab" }
                        }
                        on:click=move |_| set_page.set(Page::Register)
                    >
                        "Graduate roster"
                    </button>
                </nav>
            </header>

            <main class="main-content">
                {move || match page.get() {
                    Page::Marketplace => view! { <WishOfferContent /> }.into_any(),
                    Page::Register => view! { <RegisterForm /> }.into_any(),
                }}
            </main>

            <ToastTray />
        </div>
    }
}
