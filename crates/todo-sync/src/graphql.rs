//! GraphQL Endpoint
//!
//! `TodoEndpoint` over HTTP: the four canned operations POSTed as JSON to a
//! Hasura-style `todos` schema.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::endpoint::TodoEndpoint;
use crate::error::{Result, SyncError};
use crate::models::{Todo, TodoId};

// ========================
// Documents
// ========================

pub const GET_TODOS: &str = r#"
  query getTodos {
    todos {
      done
      id
      text
    }
  }
"#;

pub const ADD_TODO: &str = r#"
  mutation addTodo($text: String!) {
    insert_todos(objects: {text: $text}) {
      returning {
        done
        id
        text
      }
    }
  }
"#;

pub const TOGGLE_TODO: &str = r#"
  mutation toggleTodo($id: uuid!, $done: Boolean!) {
    update_todos(where: {id: {_eq: $id }}, _set: {done: $done}) {
      returning {
        done
        id
        text
      }
    }
  }
"#;

pub const DELETE_TODO: &str = r#"
  mutation deleteTodo($id: uuid!) {
    delete_todos(where: {id: {_eq: $id}}) {
      returning {
        done
        id
        text
      }
    }
  }
"#;

// ========================
// Wire Structs
// ========================

/// Request body sent for every operation
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct TodosData {
    todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct Returning {
    returning: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct InsertData {
    insert_todos: Returning,
}

#[derive(Debug, Deserialize)]
struct UpdateData {
    update_todos: Returning,
}

#[derive(Debug, Deserialize)]
struct DeleteData {
    delete_todos: Returning,
}

/// Unwrap a response envelope: `errors` wins over `data`, missing `data` is an error
fn decode_envelope<T: DeserializeOwned>(operation: &'static str, body: Value) -> Result<T> {
    let envelope: GraphQlResponse<T> = serde_json::from_value(body)?;
    if !envelope.errors.is_empty() {
        return Err(SyncError::GraphQl(
            envelope.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    envelope.data.ok_or(SyncError::MissingData(operation))
}

/// Anything outside 2xx is an `Http` error; GraphQL errors come back as 200
fn check_status(status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(SyncError::Http {
            status: status.as_u16(),
        })
    }
}

// ========================
// Endpoint
// ========================

/// HTTP client bound to one GraphQL URL
#[derive(Debug, Clone)]
pub struct GraphQlEndpoint {
    client: reqwest::Client,
    url: String,
}

impl GraphQlEndpoint {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: reqwest::Client::new(),
            url: config.endpoint.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> Result<T> {
        log::debug!("[GQL] {} -> {}", operation, self.url);
        let request = GraphQlRequest {
            query,
            operation_name: operation,
            variables,
        };
        let response = self.client.post(&self.url).json(&request).send().await?;
        check_status(response.status())?;
        let body: Value = response.json().await?;
        decode_envelope(operation, body)
    }
}

#[async_trait(?Send)]
impl TodoEndpoint for GraphQlEndpoint {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let data: TodosData = self.execute("getTodos", GET_TODOS, json!({})).await?;
        Ok(data.todos)
    }

    async fn insert_todo(&self, text: &str) -> Result<Todo> {
        let data: InsertData = self
            .execute("addTodo", ADD_TODO, json!({ "text": text }))
            .await?;
        data.insert_todos
            .returning
            .into_iter()
            .next()
            .ok_or(SyncError::MissingData("addTodo"))
    }

    async fn update_todo_done(&self, id: &TodoId, done: bool) -> Result<Todo> {
        let data: UpdateData = self
            .execute("toggleTodo", TOGGLE_TODO, json!({ "id": id, "done": done }))
            .await?;
        data.update_todos
            .returning
            .into_iter()
            .next()
            .ok_or_else(|| SyncError::NotFound(id.clone()))
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<Option<Todo>> {
        let data: DeleteData = self
            .execute("deleteTodo", DELETE_TODO, json!({ "id": id }))
            .await?;
        Ok(data.delete_todos.returning.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list() {
        let body = json!({
            "data": { "todos": [
                { "done": false, "id": "a", "text": "milk" },
                { "done": true, "id": "b", "text": "eggs" }
            ]}
        });
        let data: TodosData = decode_envelope("getTodos", body).unwrap();
        assert_eq!(
            data.todos,
            vec![Todo::new("a", "milk", false), Todo::new("b", "eggs", true)]
        );
    }

    #[test]
    fn test_decode_returning() {
        let body = json!({
            "data": { "delete_todos": { "returning": [
                { "done": true, "id": "b", "text": "eggs" }
            ]}}
        });
        let data: DeleteData = decode_envelope("deleteTodo", body).unwrap();
        assert_eq!(data.delete_todos.returning, vec![Todo::new("b", "eggs", true)]);
    }

    #[test]
    fn test_errors_take_precedence_over_data() {
        let body = json!({
            "data": { "todos": [] },
            "errors": [
                { "message": "field \"todos\" not found in type: 'query_root'" },
                { "message": "second" }
            ]
        });
        let err = decode_envelope::<TodosData>("getTodos", body).unwrap_err();
        match err {
            SyncError::GraphQl(messages) => {
                assert_eq!(messages.len(), 2);
                assert!(messages[0].contains("todos"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let err = decode_envelope::<TodosData>("getTodos", json!({})).unwrap_err();
        assert_eq!(err, SyncError::MissingData("getTodos"));
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let body = json!({ "data": { "todos": "nope" } });
        let err = decode_envelope::<TodosData>("getTodos", body).unwrap_err();
        assert!(matches!(err, SyncError::Decode(_)));
    }

    #[test]
    fn test_request_body_shape() {
        let request = GraphQlRequest {
            query: TOGGLE_TODO,
            operation_name: "toggleTodo",
            variables: json!({ "id": TodoId::new("a"), "done": true }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["operationName"], "toggleTodo");
        assert_eq!(value["variables"]["id"], "a");
        assert_eq!(value["variables"]["done"], true);
        assert!(value["query"].as_str().unwrap().contains("update_todos"));
    }

    #[test]
    fn test_non_success_status_maps_to_http_error() {
        assert!(check_status(reqwest::StatusCode::OK).is_ok());
        assert_eq!(
            check_status(reqwest::StatusCode::BAD_GATEWAY),
            Err(SyncError::Http { status: 502 })
        );
        assert_eq!(
            check_status(reqwest::StatusCode::UNAUTHORIZED),
            Err(SyncError::Http { status: 401 })
        );
    }

    #[test]
    fn test_endpoint_keeps_configured_url() {
        let config = ClientConfig::new("https://todo.example.com/v1/graphql").unwrap();
        let endpoint = GraphQlEndpoint::new(&config).unwrap();
        assert_eq!(endpoint.url(), "https://todo.example.com/v1/graphql");
    }

    #[test]
    fn test_endpoint_rejects_invalid_config() {
        let config = ClientConfig {
            endpoint: "not a url".into(),
            ..ClientConfig::default()
        };
        assert!(matches!(GraphQlEndpoint::new(&config), Err(SyncError::Config(_))));
    }
}
