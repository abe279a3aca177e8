//! New Todo Form Component
//!
//! Text input bound to the sync layer's pending input.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let sync = ctx.sync();
        spawn_local(async move {
            // Failures are logged and shown by ErrorNotice
            let _ = sync.submit_pending().await;
        });
    };

    view! {
        <form class="new-todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="add a todo"
                prop:value=move || store.pending_input().get()
                on:input=move |ev| ctx.sync().set_pending_input(event_target_value(&ev))
            />
            <button type="submit">"Create"</button>
        </form>
    }
}
