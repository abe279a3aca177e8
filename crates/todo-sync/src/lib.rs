//! Todo Sync
//!
//! Keeps a local todo list consistent with a remote GraphQL endpoint.
//!
//! Layered architecture:
//! - models: Todo entity and request status
//! - endpoint / graphql: remote data contract and its HTTP transport
//! - cache: normalized local mirror of the list
//! - sync: intents (add/toggle/delete) and the cache strategy each one applies

pub mod cache;
pub mod config;
pub mod confirm;
pub mod endpoint;
pub mod error;
pub mod graphql;
pub mod models;
pub mod sync;

pub use cache::TodoCache;
pub use config::{ClientConfig, ToggleStrategy};
pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm, DELETE_PROMPT};
pub use endpoint::TodoEndpoint;
pub use error::{Result, SyncError};
pub use graphql::GraphQlEndpoint;
pub use models::{RequestStatus, Todo, TodoId};
pub use sync::{DeleteOutcome, Snapshot, SubmitOutcome, TodoSync};
