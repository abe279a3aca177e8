//! Scripted in-memory endpoint shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use todo_sync::{Result, SyncError, Todo, TodoEndpoint, TodoId};

/// One recorded call against the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Insert(String),
    UpdateDone(TodoId, bool),
    Delete(TodoId),
}

/// Behaves like a small server holding a table of todos.
/// Each operation can be told to fail; `next_list` overrides one list reply.
#[derive(Default)]
pub struct ScriptedEndpoint {
    pub rows: RefCell<Vec<Todo>>,
    pub requests: RefCell<Vec<Request>>,
    next_id: Cell<u32>,
    pub fail_list: Cell<bool>,
    pub fail_insert: Cell<bool>,
    pub fail_update: Cell<bool>,
    pub fail_delete: Cell<bool>,
    pub next_list: RefCell<Option<Vec<Todo>>>,
    pub next_insert: RefCell<Option<Todo>>,
}

impl ScriptedEndpoint {
    pub fn with_rows(rows: Vec<Todo>) -> Self {
        let next = rows.len() as u32 + 1;
        let endpoint = Self {
            rows: RefCell::new(rows),
            ..Self::default()
        };
        endpoint.next_id.set(next.max(1));
        endpoint
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn record(&self, request: Request) {
        self.requests.borrow_mut().push(request);
    }

    fn unavailable() -> SyncError {
        SyncError::Transport("connection refused".into())
    }
}

#[async_trait(?Send)]
impl TodoEndpoint for ScriptedEndpoint {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.record(Request::List);
        if self.fail_list.get() {
            return Err(Self::unavailable());
        }
        if let Some(scripted) = self.next_list.borrow_mut().take() {
            return Ok(scripted);
        }
        Ok(self.rows.borrow().clone())
    }

    async fn insert_todo(&self, text: &str) -> Result<Todo> {
        self.record(Request::Insert(text.to_string()));
        if self.fail_insert.get() {
            return Err(Self::unavailable());
        }
        let created = match self.next_insert.borrow_mut().take() {
            Some(scripted) => scripted,
            None => {
                let id = self.next_id.get().max(1);
                self.next_id.set(id + 1);
                Todo::new(format!("id-{}", id), text, false)
            }
        };
        self.rows.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_todo_done(&self, id: &TodoId, done: bool) -> Result<Todo> {
        self.record(Request::UpdateDone(id.clone(), done));
        if self.fail_update.get() {
            return Err(Self::unavailable());
        }
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|row| &row.id == id)
            .ok_or_else(|| SyncError::NotFound(id.clone()))?;
        row.done = done;
        Ok(row.clone())
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<Option<Todo>> {
        self.record(Request::Delete(id.clone()));
        if self.fail_delete.get() {
            return Err(Self::unavailable());
        }
        let mut rows = self.rows.borrow_mut();
        let position = rows.iter().position(|row| &row.id == id);
        Ok(position.map(|p| rows.remove(p)))
    }
}

pub fn milk_bread_eggs() -> Vec<Todo> {
    vec![
        Todo::new("1", "milk", false),
        Todo::new("2", "bread", true),
        Todo::new("3", "eggs", false),
    ]
}

/// Yields to the executor before every call, so intents run under `join!`
/// interleave at each await point.
pub struct Yielding(pub std::rc::Rc<ScriptedEndpoint>);

#[async_trait(?Send)]
impl TodoEndpoint for Yielding {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        tokio::task::yield_now().await;
        self.0.list_todos().await
    }

    async fn insert_todo(&self, text: &str) -> Result<Todo> {
        tokio::task::yield_now().await;
        self.0.insert_todo(text).await
    }

    async fn update_todo_done(&self, id: &TodoId, done: bool) -> Result<Todo> {
        tokio::task::yield_now().await;
        self.0.update_todo_done(id, done).await
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<Option<Todo>> {
        tokio::task::yield_now().await;
        self.0.delete_todo(id).await
    }
}
