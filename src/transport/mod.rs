//! The HTTP seam.
//!
//! Operations assemble an [`HttpRequest`]; a [`Transport`] performs
//! exactly one round trip for it. The real implementation wraps
//! reqwest; tests script a [`mock::MockTransport`] instead.

pub mod http;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

/// The only two methods the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound request, fully assembled before it reaches the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Value of the first header with this name, if any.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The raw result of one round trip: status plus undecoded body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs a single HTTP round trip.
///
/// Errors only on transport failure; non-2xx statuses come back as a
/// normal [`HttpResponse`] for the client to classify.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
