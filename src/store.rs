//! Global Application State Store
//!
//! Mirror of the sync layer's latest snapshot, using Leptos reactive_stores
//! so each field re-renders independently.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{RequestStatus, Snapshot, Todo};

/// What the view renders from
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub status: RequestStatus,
    /// Current cached list
    pub todos: Vec<Todo>,
    /// Text in the new-todo input
    pub pending_input: String,
    /// Latest failed mutation, shown as a dismissable notice
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy a sync snapshot into the store, touching only fields that changed
pub fn store_apply_snapshot(store: &AppStore, snapshot: &Snapshot) {
    if store.status().get_untracked() != snapshot.status {
        *store.status().write() = snapshot.status;
    }
    if store.todos().with_untracked(|todos| todos != &snapshot.todos) {
        *store.todos().write() = snapshot.todos.clone();
    }
    if store.pending_input().with_untracked(|text| text != &snapshot.pending_input) {
        *store.pending_input().write() = snapshot.pending_input.clone();
    }
    let last_error = snapshot.last_error.as_ref().map(|e| e.to_string());
    if store.last_error().with_untracked(|current| current != &last_error) {
        *store.last_error().write() = last_error;
    }
}
