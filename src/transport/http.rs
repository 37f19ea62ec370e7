//! Production transport backed by a shared [`reqwest::Client`].

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, Method, Transport};

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("request to {} failed", request.url))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("failed to read response body")?;

        Ok(HttpResponse { status, body })
    }
}
