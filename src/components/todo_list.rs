//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="todo-list">
            <For
                each=move || store.todos().get()
                // `done` is part of the key so a toggled row re-renders
                key=|todo| (todo.id.clone(), todo.done)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </div>
    }
}
