use reqwest::blocking::{Client, Response};
use reqwest::Method;

use super::Timeouts;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Blocking transport built on reqwest's blocking `Client`.
///
/// reqwest never turns a status into an error unless asked to, so every
/// response is handed to `TodoApi` as-is. The blocking client owns its own
/// runtime and must not be used from inside an async context.
///
/// # Example
///
/// ```ignore
/// use todo_client::{HttpTodoClient, ReqwestTransport, Timeouts};
///
/// let transport = ReqwestTransport::new(Timeouts::default())?;
/// let client = HttpTodoClient::new("http://localhost:8080", transport);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the given timeouts. The read timeout bounds the
    /// whole exchange after connecting.
    pub fn new(timeouts: Timeouts) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.read)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        into_http_response(builder.send()?)
    }
}

fn into_http_response(response: Response) -> Result<HttpResponse, TransportError> {
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
    let body = response.text()?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
