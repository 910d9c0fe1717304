//! HTTP exchange types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. `TodoApi` builds `HttpRequest`
//! values and interprets `HttpResponse` values without touching the network;
//! a `Transport` performs the single round trip in between. Transports hand
//! back every status code as data and never decide what a 404 means, so the
//! status mapping lives in one place no matter which HTTP library is wired
//! in.

use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `path` is the absolute URL, query string included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup; returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to obtain any HTTP response at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[cfg(feature = "ureq-transport")]
    #[error("ureq: {0}")]
    Ureq(#[from] ureq::Error),

    #[cfg(feature = "reqwest-transport")]
    #[error("reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Raised by transports supplied outside this crate.
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

/// Executes one HTTP round trip.
///
/// Implementations must return non-2xx responses as `Ok(HttpResponse)`;
/// `Err` is only for failures where no response was received.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, headers: &[(&str, &str)]) -> HttpResponse {
        HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: String::new(),
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let resp = response(201, &[("Location", "/api/todos/4")]);
        assert_eq!(resp.header("location"), Some("/api/todos/4"));
        assert_eq!(resp.header("LOCATION"), Some("/api/todos/4"));
        assert_eq!(resp.header("content-type"), None);
    }

    #[test]
    fn success_covers_2xx_only() {
        assert!(response(200, &[]).is_success());
        assert!(response(204, &[]).is_success());
        assert!(!response(302, &[]).is_success());
        assert!(!response(404, &[]).is_success());
    }
}
