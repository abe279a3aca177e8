//! Todo Models
//!
//! Data structures matching the remote `todos` table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier. Opaque to the client (UUID-shaped in practice).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A todo row
///
/// `text` is fixed at creation; `done` is the only field that ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>, done: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done,
        }
    }
}

/// What the list view is allowed to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Initial list query in flight
    #[default]
    Loading,
    /// Initial list query failed; terminal for the session
    Error,
    Ready,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Loading => "loading",
            RequestStatus::Error => "error",
            RequestStatus::Ready => "ready",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_deserializes_server_row() {
        let json = r#"{"done":true,"id":"7f1c0c4e-3c1b-4d3a-9a55-0b1f4f1e2a10","text":"milk"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id.as_str(), "7f1c0c4e-3c1b-4d3a-9a55-0b1f4f1e2a10");
        assert_eq!(todo.text, "milk");
        assert!(todo.done);
    }

    #[test]
    fn test_missing_done_defaults_false() {
        let todo: Todo = serde_json::from_str(r#"{"id":"1","text":"bread"}"#).unwrap();
        assert!(!todo.done);
    }

    #[test]
    fn test_status_default_is_loading() {
        assert_eq!(RequestStatus::default(), RequestStatus::Loading);
        assert_eq!(RequestStatus::Ready.as_str(), "ready");
    }
}
