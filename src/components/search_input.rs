//! Search Input Component
//!
//! Debounced free-text search box. The raw value lives in the parent so a
//! filter reset can blank the field; only settled values reach `set_query`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

use crate::config::SEARCH_DEBOUNCE_MS;

#[component]
pub fn SearchInput(
    raw: ReadSignal<String>,
    set_raw: WriteSignal<String>,
    /// Receives the debounced query text.
    set_query: WriteSignal<String>,
) -> impl IntoView {
    // Bumped on every keystroke; a sleeping debounce wakes up, sees a newer
    // epoch, and drops its value.
    let (epoch, set_epoch) = signal(0u32);

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        set_raw.set(text.clone());
        let this_epoch = epoch.get_untracked() + 1;
        set_epoch.set(this_epoch);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // Both guards: superseded by a later keystroke, or the field was
            // cleared externally while we slept.
            if epoch.get_untracked() == this_epoch && raw.get_untracked() == text {
                set_query.set(text);
            }
        });
    };

    let on_clear = move |_| {
        set_epoch.update(|e| *e += 1);
        set_raw.set(String::new());
        set_query.set(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder="Search wishes and offers..."
                prop:value=move || raw.get()
                on:input=on_input
            />
            <Show when=move || !raw.get().is_empty()>
                <button type="button" class="search-clear-btn" on:click=on_clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}
