//! Location Picker Component
//!
//! Cascading province → district → municipality selects, shared by the
//! applicant and institute forms. Selecting a parent clears its children,
//! same invariant as the marketplace category facets.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::facet::LocationSelection;
use crate::models::{District, Municipality};
use crate::store::{use_app_store, AppStateStoreFields};

fn parse_select(value: &str) -> Option<u32> {
    value.parse::<u32>().ok()
}

#[component]
pub fn LocationPicker(selection: RwSignal<LocationSelection>) -> impl IntoView {
    let store = use_app_store();

    let (districts, set_districts) = signal(Vec::<District>::new());
    let (municipalities, set_municipalities) = signal(Vec::<Municipality>::new());

    // District list follows the selected province.
    Effect::new(move |_| {
        let province_id = selection.with(|s| s.province_id);
        let Some(id) = province_id else {
            set_districts.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::get_districts(id).await {
                Ok(list) => {
                    // Province may have changed while the request was out.
                    if selection.with_untracked(|s| s.province_id) == Some(id) {
                        set_districts.set(list);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[LocationPicker] Error loading districts: {}", e).into(),
                    );
                }
            }
        });
    });

    // Municipality list follows the selected district.
    Effect::new(move |_| {
        let district_id = selection.with(|s| s.district_id);
        let Some(id) = district_id else {
            set_municipalities.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::get_municipalities(id).await {
                Ok(list) => {
                    if selection.with_untracked(|s| s.district_id) == Some(id) {
                        set_municipalities.set(list);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[LocationPicker] Error loading municipalities: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="location-picker">
            <select
                prop:value=move || {
                    selection.with(|s| s.province_id).map_or(String::new(), |id| id.to_string())
                }
                on:change=move |ev| {
                    let selected = parse_select(&event_target_value(&ev));
                    selection.update(|s| s.set_province(selected));
                }
            >
                <option value="">"Select province"</option>
                <For
                    each=move || store.provinces().get()
                    key=|p| p.id
                    children=move |p| {
                        view! { <option value=p.id.to_string()>{p.name.clone()}</option> }
                    }
                />
            </select>

            <select
                disabled=move || selection.with(|s| s.province_id.is_none())
                prop:value=move || {
                    selection.with(|s| s.district_id).map_or(String::new(), |id| id.to_string())
                }
                on:change=move |ev| {
                    let selected = parse_select(&event_target_value(&ev));
                    selection.update(|s| s.set_district(selected));
                }
            >
                <option value="">"Select district"</option>
                <For
                    each=move || districts.get()
                    key=|d| d.id
                    children=move |d| {
                        view! { <option value=d.id.to_string()>{d.name.clone()}</option> }
                    }
                />
            </select>

            <select
                disabled=move || selection.with(|s| s.district_id.is_none())
                prop:value=move || {
                    selection.with(|s| s.municipality_id).map_or(String::new(), |id| id.to_string())
                }
                on:change=move |ev| {
                    let selected = parse_select(&event_target_value(&ev));
                    selection.update(|s| s.set_municipality(selected));
                }
            >
                <option value="">"Select municipality"</option>
                <For
                    each=move || municipalities.get()
                    key=|m| m.id
                    children=move |m| {
                        view! { <option value=m.id.to_string()>{m.name.clone()}</option> }
                    }
                />
            </select>
        </div>
    }
}
