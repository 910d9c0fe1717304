//! `TodoClient` backed by a real HTTP transport.
//!
//! # Design
//! `HttpTodoClient` pairs a `TodoApi` with any `Transport`. Each operation
//! is exactly one `build_* -> execute -> parse_*` round trip with no retries
//! and no state kept between calls. Because the status mapping lives in
//! `TodoApi`, swapping the transport cannot change observable behavior.

use tracing::debug;

use crate::api::TodoApi;
use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{ResourceLocator, Todo, TodoRequest};

#[cfg(feature = "reqwest-transport")]
use crate::transport::ReqwestTransport;
#[cfg(feature = "ureq-transport")]
use crate::transport::UreqTransport;

/// HTTP backend over the ureq transport.
#[cfg(feature = "ureq-transport")]
pub type UreqTodoClient = HttpTodoClient<UreqTransport>;

/// HTTP backend over the reqwest blocking transport.
#[cfg(feature = "reqwest-transport")]
pub type ReqwestTodoClient = HttpTodoClient<ReqwestTransport>;

#[derive(Debug, Clone)]
pub struct HttpTodoClient<T> {
    api: TodoApi,
    transport: T,
}

impl<T: Transport> HttpTodoClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            api: TodoApi::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.path, "sending todo request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "todo response received");
        Ok(response)
    }
}

impl<T: Transport> TodoClient for HttpTodoClient<T> {
    fn list_by_keyword(&self, keyword: &str) -> Result<Vec<Todo>, ApiError> {
        let response = self.round_trip(self.api.build_list_by_keyword(keyword))?;
        self.api.parse_list_by_keyword(response)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Todo>, ApiError> {
        let response = self.round_trip(self.api.build_get_by_id(id))?;
        self.api.parse_get_by_id(response)
    }

    fn create(&self, request: &TodoRequest) -> Result<ResourceLocator, ApiError> {
        let response = self.round_trip(self.api.build_create(request)?)?;
        self.api.parse_create(response)
    }

    fn update(&self, id: i64, request: &TodoRequest) -> Result<(), ApiError> {
        let response = self.round_trip(self.api.build_update(id, request)?)?;
        self.api.parse_update(response)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self.round_trip(self.api.build_delete(id))?;
        self.api.parse_delete(response)
    }
}
