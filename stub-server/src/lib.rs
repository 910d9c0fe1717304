//! In-memory stand-in for the remote todo service.
//!
//! Serves `/api/todos` the way the real service does: keyword search,
//! lookups that answer 404 with a problem-detail body, creates that answer
//! 201 with a `Location` header and no body. Every create/update payload is
//! recorded verbatim so tests can check what went over the wire.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub deadline: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub description: String,
    pub completed: Option<bool>,
    pub deadline: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Default)]
struct Store {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// Shared state behind the router. Clones share the same store.
#[derive(Clone, Debug, Default)]
pub struct StubState {
    store: Arc<RwLock<Store>>,
    payloads: Arc<Mutex<Vec<Value>>>,
}

impl StubState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload `todos`; new ids continue after the highest seeded id.
    pub fn seeded(todos: impl IntoIterator<Item = Todo>) -> Self {
        let todos: BTreeMap<i64, Todo> = todos.into_iter().map(|t| (t.id, t)).collect();
        let next_id = todos.keys().next_back().copied().unwrap_or(0);
        Self {
            store: Arc::new(RwLock::new(Store { todos, next_id })),
            payloads: Arc::default(),
        }
    }

    /// JSON bodies of every create and update received so far.
    pub fn received_payloads(&self) -> Vec<Value> {
        self.payloads
            .lock()
            .expect("payload journal poisoned")
            .clone()
    }

    fn record(&self, payload: &Value) {
        self.payloads
            .lock()
            .expect("payload journal poisoned")
            .push(payload.clone());
    }
}

pub fn app() -> Router {
    app_with(StubState::new())
}

pub fn app_with(state: StubState) -> Router {
    Router::new()
        .route("/api/todos", get(search_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: StubState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}

/// RFC 7807 body returned for unknown ids.
fn not_found(id: i64) -> Response {
    let body = serde_json::json!({
        "type": "about:blank",
        "status": 404,
        "title": "Not Found",
        "detail": "todo not found",
        "instance": format!("/api/todos/{id}"),
    });
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "application/problem+json")],
        body.to_string(),
    )
        .into_response()
}

/// Parse and record a create/update body. Anything that is not a valid
/// payload is rejected with 422.
fn read_payload(state: &StubState, body: &Bytes) -> Result<TodoPayload, Response> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response())?;
    state.record(&value);
    serde_json::from_value(value)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response())
}

async fn search_todos(
    State(state): State<StubState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Todo>> {
    let store = state.store.read().await;
    let todos = store
        .todos
        .values()
        .rev()
        .filter(|todo| todo.description.contains(&params.keyword))
        .cloned()
        .collect();
    Json(todos)
}

async fn get_todo(State(state): State<StubState>, Path(id): Path<i64>) -> Response {
    let store = state.store.read().await;
    match store.todos.get(&id) {
        Some(todo) => Json(todo.clone()).into_response(),
        None => not_found(id),
    }
}

async fn create_todo(State(state): State<StubState>, body: Bytes) -> Response {
    let payload = match read_payload(&state, &body) {
        Ok(payload) => payload,
        Err(rejection) => return rejection,
    };
    let mut store = state.store.write().await;
    store.next_id += 1;
    let id = store.next_id;
    store.todos.insert(
        id,
        Todo {
            id,
            description: payload.description,
            completed: payload.completed.unwrap_or(false),
            deadline: payload.deadline,
            created_at: chrono::Local::now().naive_local(),
        },
    );
    tracing::debug!(id, "todo created");

    let location = format!("/api/todos/{id}");
    match HeaderValue::from_str(&location) {
        Ok(location) => (StatusCode::CREATED, [(header::LOCATION, location)]).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn update_todo(
    State(state): State<StubState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Response {
    let payload = match read_payload(&state, &body) {
        Ok(payload) => payload,
        Err(rejection) => return rejection,
    };
    let mut store = state.store.write().await;
    let Some(todo) = store.todos.get_mut(&id) else {
        return not_found(id);
    };
    todo.description = payload.description;
    todo.deadline = payload.deadline;
    if let Some(completed) = payload.completed {
        todo.completed = completed;
    }
    StatusCode::OK.into_response()
}

async fn delete_todo(State(state): State<StubState>, Path(id): Path<i64>) -> Response {
    let mut store = state.store.write().await;
    match store.todos.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, description: &str) -> Todo {
        Todo {
            id,
            description: description.to_string(),
            completed: false,
            deadline: "2025-10-01T12:00:00".parse().unwrap(),
            created_at: "2025-09-01T12:00:00".parse().unwrap(),
        }
    }

    #[test]
    fn todo_serializes_with_camel_case() {
        let json = serde_json::to_value(todo(1, "Test")).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["deadline"], "2025-10-01T12:00:00");
        assert_eq!(json["createdAt"], "2025-09-01T12:00:00");
    }

    #[test]
    fn payload_completed_is_optional() {
        let input: TodoPayload =
            serde_json::from_str(r#"{"description":"x","deadline":"2025-10-01T12:00:00"}"#)
                .unwrap();
        assert!(input.completed.is_none());
    }

    #[test]
    fn payload_rejects_missing_deadline() {
        let result: Result<TodoPayload, _> = serde_json::from_str(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn seeded_ids_continue_after_highest() {
        let state = StubState::seeded([todo(1, "a"), todo(3, "b")]);
        let store = state.store.try_read().unwrap();
        assert_eq!(store.next_id, 3);
        assert_eq!(store.todos.len(), 2);
    }

    #[test]
    fn payloads_start_empty() {
        assert!(StubState::new().received_payloads().is_empty());
    }

    #[test]
    fn recorded_payloads_are_returned_in_order() {
        let state = StubState::new();
        state.record(&serde_json::json!({"n": 1}));
        state.clone().record(&serde_json::json!({"n": 2}));
        assert_eq!(
            state.received_payloads(),
            vec![serde_json::json!({"n": 1}), serde_json::json!({"n": 2})]
        );
    }

    #[test]
    #[should_panic(expected = "payload journal poisoned")]
    fn poisoned_journal_is_not_read_as_empty() {
        let state = StubState::new();
        let payloads = state.payloads.clone();
        let _ = std::thread::spawn(move || {
            let _guard = payloads.lock().unwrap();
            panic!("writer died");
        })
        .join();
        state.received_payloads();
    }
}
