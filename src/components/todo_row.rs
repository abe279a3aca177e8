//! Todo Row Component
//!
//! Clicking the text toggles `done`; the × button deletes after a
//! browser confirm.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{DeleteOutcome, Todo};

use crate::context::use_app_context;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let text_class = if todo.done { "todo-text done" } else { "todo-text" };
    let text = todo.text.clone();
    let toggle_target = todo.clone();
    let delete_target = todo;

    view! {
        <p
            class="todo-row"
            on:click=move |_| {
                let sync = ctx.sync();
                let todo = toggle_target.clone();
                spawn_local(async move {
                    let _ = sync.toggle_todo(&todo).await;
                });
            }
        >
            <span class=text_class>{text}</span>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    let sync = ctx.sync();
                    let todo = delete_target.clone();
                    spawn_local(async move {
                        if let Ok(DeleteOutcome::Cancelled) = sync.delete_todo(&todo).await {
                            log::debug!("[ROW] Kept {}", todo.id);
                        }
                    });
                }
            >
                "×"
            </button>
        </p>
    }
}
