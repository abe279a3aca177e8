//! Remote Data Endpoint
//!
//! Abstract interface to the service that owns the authoritative todo list.
//! The GraphQL transport is the production implementation; tests script
//! their own.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Todo, TodoId};

/// Remote todo operations
///
/// Each call is a single request/response round trip with no partial
/// results. Futures are not `Send`: the client runs on a single-threaded
/// executor (the browser event loop).
#[async_trait(?Send)]
pub trait TodoEndpoint {
    /// Fetch every todo
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Create a todo; the server assigns the id and `done = false`
    async fn insert_todo(&self, text: &str) -> Result<Todo>;

    /// Set `done` on the matching todo and return the updated row
    async fn update_todo_done(&self, id: &TodoId, done: bool) -> Result<Todo>;

    /// Remove the matching todo, returning its last-known fields
    /// (`None` when nothing matched)
    async fn delete_todo(&self, id: &TodoId) -> Result<Option<Todo>>;
}

#[async_trait(?Send)]
impl<E: TodoEndpoint + ?Sized> TodoEndpoint for std::rc::Rc<E> {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        (**self).list_todos().await
    }

    async fn insert_todo(&self, text: &str) -> Result<Todo> {
        (**self).insert_todo(text).await
    }

    async fn update_todo_done(&self, id: &TodoId, done: bool) -> Result<Todo> {
        (**self).update_todo_done(id, done).await
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<Option<Todo>> {
        (**self).delete_todo(id).await
    }
}
