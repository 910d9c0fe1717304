use std::fmt;

use ureq::http::Response;
use ureq::{Agent, Body, RequestBuilder};

use super::Timeouts;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Blocking transport built on a ureq `Agent`.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data and `TodoApi` decides what they mean. The
/// agent's connection pool is shared by clones.
///
/// # Example
///
/// ```ignore
/// use todo_client::{HttpTodoClient, Timeouts, UreqTransport};
///
/// let client = HttpTodoClient::new("http://localhost:8080", UreqTransport::new(Timeouts::default()));
/// ```
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(timeouts: Timeouts) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(timeouts.connect))
            .timeout_recv_response(Some(timeouts.read))
            .timeout_recv_body(Some(timeouts.read))
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap an existing agent. It must be built with
    /// `http_status_as_error(false)`, otherwise a 404 arrives as a transport
    /// error instead of a response.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(Timeouts::default())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let response = match method {
            HttpMethod::Get => with_headers(self.agent.get(&path), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&path), &headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&path), &headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = with_headers(self.agent.put(&path), &headers);
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        }?;

        into_http_response(response)
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    builder
}

fn into_http_response(mut response: Response<Body>) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    // ureq caps bodies at 10 MiB by default; reqwest has no cap.
    let body = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_string()?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
