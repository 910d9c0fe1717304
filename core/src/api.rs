//! Stateless HTTP request builder and response interpreter for the todo API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Every HTTP backend goes through the same pair, which is what keeps two
//! different HTTP libraries indistinguishable to callers.
//!
//! Status mapping:
//!
//! | operation | 2xx | 404 | other |
//! |-----------|-----|-----|-------|
//! | list      | todos | empty list | `HttpError` |
//! | get       | `Some(todo)` | `None` | `HttpError` |
//! | create    | `Location` header | `HttpError` | `HttpError` |
//! | update    | `()` | `NotFound` | `HttpError` |
//! | delete    | `()` | `NotFound` | `HttpError` |

use tracing::debug;
use url::form_urlencoded;

use crate::error::{ApiError, StatusError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ResourceLocator, Todo, TodoRequest};

/// Path of the todo collection, relative to the base address.
pub const TODOS_PATH: &str = "/api/todos";

const NOT_FOUND: u16 = 404;

/// Request builder and response interpreter for one base address.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{TODOS_PATH}/{id}", self.base_url)
    }

    pub fn build_list_by_keyword(&self, keyword: &str) -> HttpRequest {
        let keyword: String = form_urlencoded::byte_serialize(keyword.as_bytes()).collect();
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}?keyword={keyword}", self.collection_url()),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_by_id(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &TodoRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::SerializationError)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: i64, input: &TodoRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::SerializationError)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_by_keyword(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        if response.status == NOT_FOUND {
            debug!("todo search answered 404, treating as no matches");
            return Ok(Vec::new());
        }
        check_success(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&response.body).map_err(ApiError::DeserializationError)
    }

    pub fn parse_get_by_id(&self, response: HttpResponse) -> Result<Option<Todo>, ApiError> {
        if response.status == NOT_FOUND {
            debug!("todo lookup answered 404, returning absence");
            return Ok(None);
        }
        check_success(&response)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(ApiError::DeserializationError)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<ResourceLocator, ApiError> {
        check_success(&response)?;
        response
            .header("location")
            .map(ResourceLocator::new)
            .ok_or(ApiError::MissingLocation)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_mutation(response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_mutation(response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Reject any non-2xx status as an unmapped `HttpError`.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError(StatusError {
        status: response.status,
        body: response.body.clone(),
    }))
}

/// Like `check_success`, but a 404 becomes the `NotFound` domain failure.
fn check_mutation(response: HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let cause = StatusError {
        status: response.status,
        body: response.body,
    };
    if cause.status == NOT_FOUND {
        debug!("mutation target is missing");
        return Err(ApiError::NotFound(cause));
    }
    Err(ApiError::HttpError(cause))
}
