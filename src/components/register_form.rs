//! Graduate Registration Form Component
//!
//! Minimal roster sign-up: name, email, and the cascading location picker.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::LocationPicker;
use crate::context::use_app_context;
use crate::facet::LocationSelection;
use crate::models::GraduateRegistration;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let location = RwSignal::new(LocationSelection::default());

    let can_submit = move || {
        !full_name.get().trim().is_empty()
            && !email.get().trim().is_empty()
            && location.with(|l| l.is_complete())
            && !submitting.get()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let loc = location.get_untracked();
        let (Some(province_id), Some(district_id), Some(municipality_id)) =
            (loc.province_id, loc.district_id, loc.municipality_id)
        else {
            return;
        };
        let registration = GraduateRegistration {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            province_id,
            district_id,
            municipality_id,
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::register_graduate(&registration).await {
                Ok(()) => {
                    ctx.notify("Registration submitted.");
                    set_full_name.set(String::new());
                    set_email.set(String::new());
                    location.set(LocationSelection::default());
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[RegisterForm] Submit failed: {}", e).into(),
                    );
                    ctx.notify("Could not submit registration. Please try again.");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <h2>"Join the graduate roster"</h2>
            <input
                type="text"
                placeholder="Full name"
                prop:value=move || full_name.get()
                on:input=move |ev| set_full_name.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />

            <LocationPicker selection=location />

            <button type="submit" disabled=move || !can_submit()>
                {move || if submitting.get() { "Submitting..." } else { "Register" }}
            </button>
        </form>
    }
}
