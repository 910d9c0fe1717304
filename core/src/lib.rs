//! Blocking client for the remote todo service.
//!
//! # Overview
//! `TodoClient` is the single contract callers program against. Three
//! backends implement it: `HttpTodoClient` over ureq, `HttpTodoClient` over
//! reqwest, and the offline `MockTodoClient`. `backend::connect` picks one
//! from a `TodoServiceConfig` at startup.
//!
//! # Design
//! - `TodoApi` is stateless: it builds `HttpRequest` values and interprets
//!   `HttpResponse` values, so the status mapping is shared by every
//!   transport.
//! - A 404 on a read is absence (`None` / empty list); a 404 on update or
//!   delete is `ApiError::NotFound`; everything else is passed through.
//! - DTOs are defined independently from the stub-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod http_client;
pub mod mock;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use backend::connect;
pub use client::TodoClient;
pub use config::{ConfigError, TodoServiceConfig, TransportKind};
pub use error::{ApiError, StatusError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use http_client::HttpTodoClient;
#[cfg(feature = "reqwest-transport")]
pub use http_client::ReqwestTodoClient;
#[cfg(feature = "ureq-transport")]
pub use http_client::UreqTodoClient;
pub use mock::MockTodoClient;
#[cfg(feature = "reqwest-transport")]
pub use transport::ReqwestTransport;
pub use transport::Timeouts;
#[cfg(feature = "ureq-transport")]
pub use transport::UreqTransport;
pub use types::{ResourceLocator, Todo, TodoRequest};
