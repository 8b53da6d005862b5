//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// One non-blocking notification shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active notifications - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Active notifications - write
    set_toasts: WriteSignal<Vec<Toast>>,
}

impl AppContext {
    pub fn new(toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>)) -> Self {
        Self {
            toasts: toasts.0,
            set_toasts: toasts.1,
        }
    }

    /// Show a non-blocking notification. Fetch failures end up here; the
    /// list underneath keeps its previously fetched data.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        self.set_toasts.update(|toasts| {
            let id = toasts.iter().map(|t| t.id).max().map_or(0, |m| m + 1);
            toasts.push(Toast { id, message });
        });
    }

    /// Dismiss a notification by id.
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
