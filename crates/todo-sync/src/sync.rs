//! Synchronization Layer
//!
//! Turns user intents into endpoint calls and decides, per intent, how the
//! local cache catches up:
//! - add: refetch the whole list
//! - delete: patch the cache by removing the id
//! - toggle: per [`ToggleStrategy`]
//!
//! State sits in a `RefCell` that is never held across an `.await`, so two
//! intents issued back to back run as two independent in-flight requests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cache::TodoCache;
use crate::config::{ClientConfig, ToggleStrategy};
use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::endpoint::TodoEndpoint;
use crate::error::{Result, SyncError};
use crate::graphql::GraphQlEndpoint;
use crate::models::{RequestStatus, Todo};

/// Everything the presentation layer renders from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub status: RequestStatus,
    pub todos: Vec<Todo>,
    pub pending_input: String,
    /// Latest failed mutation or refetch, cleared by the next success
    pub last_error: Option<SyncError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing was sent
    Ignored,
    Created(Todo),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation, nothing was sent
    Cancelled,
    /// Row the server reported removing (`None` if it was already gone)
    Deleted(Option<Todo>),
}

#[derive(Debug, Default)]
struct SyncState {
    status: RequestStatus,
    cache: TodoCache,
    pending_input: String,
    /// Set once the initial list query fails; terminal
    fetch_error: Option<SyncError>,
    last_error: Option<SyncError>,
}

type Listener = Rc<dyn Fn(&Snapshot)>;

pub struct TodoSync<E, C> {
    endpoint: E,
    confirm: C,
    toggle_strategy: ToggleStrategy,
    state: RefCell<SyncState>,
    listeners: RefCell<Vec<Listener>>,
}

impl<C: Confirm> TodoSync<GraphQlEndpoint, C> {
    /// Build a client talking to the configured GraphQL endpoint
    pub fn from_config(config: &ClientConfig, confirm: C) -> Result<Self> {
        let endpoint = GraphQlEndpoint::new(config)?;
        Ok(Self::new(endpoint, confirm).with_toggle_strategy(config.toggle_strategy))
    }
}

impl<E: TodoEndpoint, C: Confirm> TodoSync<E, C> {
    pub fn new(endpoint: E, confirm: C) -> Self {
        Self {
            endpoint,
            confirm,
            toggle_strategy: ToggleStrategy::default(),
            state: RefCell::new(SyncState::default()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn with_toggle_strategy(mut self, strategy: ToggleStrategy) -> Self {
        self.toggle_strategy = strategy;
        self
    }

    /// Tear down: drop listeners and hand back the injected collaborators
    pub fn into_parts(self) -> (E, C) {
        self.listeners.borrow_mut().clear();
        (self.endpoint, self.confirm)
    }

    // ========================
    // Reads
    // ========================

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn status(&self) -> RequestStatus {
        self.state.borrow().status
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.state.borrow().cache.snapshot()
    }

    pub fn pending_input(&self) -> String {
        self.state.borrow().pending_input.clone()
    }

    pub fn last_error(&self) -> Option<SyncError> {
        self.state.borrow().last_error.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.borrow();
        Snapshot {
            status: state.status,
            todos: state.cache.snapshot(),
            pending_input: state.pending_input.clone(),
            last_error: state.last_error.clone(),
        }
    }

    /// Call `listener` with a fresh snapshot after every state change
    pub fn subscribe(&self, listener: impl Fn(&Snapshot) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    // ========================
    // Intents
    // ========================

    /// Initial list query. `Loading -> Ready` or `Loading -> Error`.
    ///
    /// Once in `Error` this returns the stored failure without a request;
    /// while `Ready` it is a plain refetch.
    pub async fn load(&self) -> Result<()> {
        if let Some(err) = self.state.borrow().fetch_error.clone() {
            return Err(err);
        }

        match self.endpoint.list_todos().await {
            Ok(todos) => {
                log::info!("[SYNC] Loaded {} todos", todos.len());
                self.apply_list(todos);
                Ok(())
            }
            Err(e) if self.status() == RequestStatus::Loading => {
                log::error!("[SYNC] Initial list query failed: {}", e);
                self.update(|state| {
                    state.status = RequestStatus::Error;
                    state.fetch_error = Some(e.clone());
                });
                Err(e)
            }
            Err(e) => Err(self.mutation_failed("refetch", e)),
        }
    }

    pub fn set_pending_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| state.pending_input = text);
    }

    /// Submit whatever is in the pending input
    pub async fn submit_pending(&self) -> Result<SubmitOutcome> {
        let text = self.pending_input();
        self.submit_new_todo(&text).await
    }

    /// Insert a todo, then refetch the list.
    ///
    /// Blank text sends nothing. The pending input is cleared once the insert
    /// succeeds and kept when it fails.
    pub async fn submit_new_todo(&self, text: &str) -> Result<SubmitOutcome> {
        if text.trim().is_empty() {
            log::debug!("[SYNC] Ignoring blank todo");
            return Ok(SubmitOutcome::Ignored);
        }

        let created = match self.endpoint.insert_todo(text).await {
            Ok(created) => created,
            Err(e) => return Err(self.mutation_failed("insert", e)),
        };
        log::info!("[SYNC] Created todo {}, refetching list", created.id);
        self.update(|state| {
            state.pending_input.clear();
            state.last_error = None;
        });

        match self.endpoint.list_todos().await {
            Ok(todos) => {
                self.apply_list(todos);
                Ok(SubmitOutcome::Created(created))
            }
            Err(e) => Err(self.mutation_failed("refetch", e)),
        }
    }

    /// Flip `done` on the server. Exactly one request.
    pub async fn toggle_todo(&self, todo: &Todo) -> Result<Todo> {
        let done = !todo.done;
        let updated = match self.endpoint.update_todo_done(&todo.id, done).await {
            Ok(updated) => updated,
            Err(e) => return Err(self.mutation_failed("toggle", e)),
        };

        let strategy = self.toggle_strategy;
        self.update(|state| {
            if strategy == ToggleStrategy::MergeEntity {
                state.cache.merge_entity(updated.clone());
            }
            state.last_error = None;
        });
        log::info!("[SYNC] Toggled todo {} to done={} ({:?})", updated.id, updated.done, strategy);
        Ok(updated)
    }

    /// Ask for confirmation, delete on the server, then drop the id locally
    pub async fn delete_todo(&self, todo: &Todo) -> Result<DeleteOutcome> {
        if !self.confirm.confirm(DELETE_PROMPT) {
            log::debug!("[SYNC] Delete of {} cancelled", todo.id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = match self.endpoint.delete_todo(&todo.id).await {
            Ok(removed) => removed,
            Err(e) => return Err(self.mutation_failed("delete", e)),
        };
        self.update(|state| {
            state.cache.remove(&todo.id);
            state.last_error = None;
        });
        log::info!("[SYNC] Deleted todo {}", todo.id);
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Dismiss the current error notice
    pub fn clear_error(&self) {
        if self.state.borrow().last_error.is_some() {
            self.update(|state| state.last_error = None);
        }
    }

    // ========================
    // Internals
    // ========================

    /// Replace the cache with a list result; the first success leaves `Loading`
    fn apply_list(&self, todos: Vec<Todo>) {
        self.update(|state| {
            state.cache.replace_list(todos);
            if state.status == RequestStatus::Loading {
                state.status = RequestStatus::Ready;
            }
            state.last_error = None;
        });
    }

    /// Record a failed mutation as a notice. Status is not touched.
    fn mutation_failed(&self, what: &str, e: SyncError) -> SyncError {
        log::warn!("[SYNC] {} failed: {}", what, e);
        self.update(|state| state.last_error = Some(e.clone()));
        e
    }

    /// Apply `f` in one borrow, then notify listeners
    fn update(&self, f: impl FnOnce(&mut SyncState)) {
        f(&mut *self.state.borrow_mut());
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        if listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
