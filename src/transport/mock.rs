//! A scripted transport for tests.
//!
//! Records every request it is handed and replays canned responses in
//! order, so tests can assert on the exact headers and bodies an
//! operation emits — or that it emitted nothing at all.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, Transport};

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body.
    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_response(status, body.to_string());
    }

    /// Queue a response with a raw body.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.into(),
        });
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        match self.responses.lock().unwrap().pop_front() {
            Some(response) => Ok(response),
            None => bail!("MockTransport: no more scripted responses"),
        }
    }
}
