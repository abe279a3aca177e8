//! Todo App Frontend
//!
//! Builds the sync layer from the page config and renders by request status.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_sync::RequestStatus;

use crate::browser::{self, BrowserConfirm};
use crate::components::{ErrorNotice, NewTodoForm, StatusMessage, TodoList};
use crate::context::{AppContext, ClientSync};
use crate::store::{store_apply_snapshot, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let sync = browser::load_config()
        .and_then(|config| ClientSync::from_config(&config, BrowserConfirm));

    match sync {
        Ok(sync) => view! { <TodoApp sync=Rc::new(sync) /> }.into_any(),
        Err(e) => {
            log::error!("[APP] Invalid client config: {}", e);
            view! { <StatusMessage status=RequestStatus::Error /> }.into_any()
        }
    }
}

#[component]
fn TodoApp(sync: Rc<ClientSync>) -> impl IntoView {
    log::info!("[APP] Using GraphQL endpoint {}", sync.endpoint().url());

    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(sync.clone());
    provide_context(ctx);

    // Every sync state change lands in the store
    sync.subscribe(move |snapshot| store_apply_snapshot(&store, snapshot));

    // Initial list query
    spawn_local(async move {
        let sync = ctx.sync();
        if sync.load().await.is_ok() {
            log::info!("[APP] Loaded {} todos", sync.todos().len());
        }
    });

    view! {
        {move || match store.status().get() {
            RequestStatus::Ready => view! {
                <div class="app">
                    <h1>
                        "Todo App "
                        <span role="img" aria-label="checkmark">"📝"</span>
                    </h1>

                    <NewTodoForm />

                    <ErrorNotice />

                    <TodoList />
                </div>
            }.into_any(),
            status => view! { <StatusMessage status=status /> }.into_any(),
        }}
    }
}
