//! Toast Tray Component
//!
//! Non-blocking notifications for fetch failures and form feedback.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastTray() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-tray">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            <span>{toast.message.clone()}</span>
                            <button on:click=move |_| ctx.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
