//! Sync Errors
//!
//! Everything that can go wrong between an intent and the remote endpoint.

use thiserror::Error;

use crate::models::TodoId;

/// Common result type for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors surfaced by the endpoint and the sync layer
///
/// Cloneable so the latest failure can live in a [`crate::Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Endpoint responded with HTTP {status}")]
    Http { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Response for {0} carried no data")]
    MissingData(&'static str),

    #[error("Not found: {0}")]
    NotFound(TodoId),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SyncError::Decode(e.to_string())
        } else {
            SyncError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(e: serde_json::Error) -> Self {
        SyncError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_messages_are_joined() {
        let err = SyncError::GraphQl(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "GraphQL error: a; b");
    }

    #[test]
    fn test_not_found_names_the_id() {
        let err = SyncError::NotFound(TodoId::new("42"));
        assert_eq!(err.to_string(), "Not found: 42");
    }
}
