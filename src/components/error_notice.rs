//! Error Notice Component
//!
//! Shows the latest failed mutation. Dismissed by the × button or after
//! a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

const AUTO_DISMISS_MS: u32 = 5_000;

#[component]
pub fn ErrorNotice() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    Effect::new(move |_| {
        let Some(message) = store.last_error().get() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            // Only clear if a newer error hasn't replaced it
            if store.last_error().get_untracked().as_deref() == Some(message.as_str()) {
                ctx.sync().clear_error();
            }
        });
    });

    view! {
        {move || store.last_error().get().map(|message| view! {
            <div class="error-notice">
                <span>{message}</span>
                <button on:click=move |_| ctx.sync().clear_error()>"×"</button>
            </div>
        })}
    }
}
