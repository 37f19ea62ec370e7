//! The client: shared request construction, dispatch and projection.
//!
//! Every operation funnels through [`JinaClient::post_json`] or
//! [`JinaClient::get_json`]: common headers, the domain allow-list
//! check, the status check and the JSON decode all live here, so the
//! per-operation modules only declare endpoint, body, extra headers and
//! output shape.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::auth::Credential;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::ops::Operation;
use crate::transport::http::ReqwestTransport;
use crate::transport::{HttpRequest, Method, Transport};

/// Client for the Jina.ai APIs.
///
/// Holds no credential: the bearer token is passed into each call and
/// dropped when it returns. Cheap to share; each call is independent
/// and the client is never mutated after construction.
pub struct JinaClient {
    transport: Arc<dyn Transport>,
    config: Config,
}

impl JinaClient {
    /// Client with the production transport and default configuration.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()), Config::default())
    }

    pub fn with_transport(transport: Arc<dyn Transport>, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// POST `body` as JSON. `extra_headers` come after the common
    /// Authorization/Accept/Content-Type set.
    pub(crate) async fn post_json(
        &self,
        operation: Operation,
        url: &str,
        credential: &Credential,
        extra_headers: Vec<(&'static str, String)>,
        body: Value,
    ) -> Result<Value> {
        let mut headers = vec![
            ("Authorization".to_string(), credential.bearer()),
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        headers.extend(extra_headers.into_iter().map(|(n, v)| (n.to_string(), v)));
        self.dispatch(
            operation,
            HttpRequest {
                method: Method::Post,
                url: url.to_string(),
                headers,
                body: Some(body),
            },
        )
        .await
    }

    /// GET with the common auth headers; no body, no content-type.
    pub(crate) async fn get_json(
        &self,
        operation: Operation,
        url: &str,
        credential: &Credential,
    ) -> Result<Value> {
        let headers = vec![
            ("Authorization".to_string(), credential.bearer()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        self.dispatch(
            operation,
            HttpRequest {
                method: Method::Get,
                url: url.to_string(),
                headers,
                body: None,
            },
        )
        .await
    }

    /// One round trip: allow-list check, send, status check, decode.
    async fn dispatch(&self, operation: Operation, request: HttpRequest) -> Result<Value> {
        self.check_host(operation, &request.url)?;
        debug!(%operation, url = %request.url, "sending request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| Error::Transport {
                operation,
                detail: e.to_string(),
            })?;
        debug!(%operation, status = response.status, "received response");

        if !(200..300).contains(&response.status) {
            return Err(Error::Remote {
                operation,
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| Error::MalformedResponse {
            operation,
            detail: format!("response is not valid JSON: {e}"),
        })
    }

    fn check_host(&self, operation: Operation, url: &str) -> Result<()> {
        let parsed = reqwest::Url::parse(url).map_err(|_| Error::InvalidInput {
            operation,
            parameter: "url",
            reason: "is not a valid URL",
        })?;
        let host = parsed.host_str().unwrap_or_default();
        if !self.config.host_allowed(host) {
            return Err(Error::DomainNotAllowed {
                operation,
                host: host.to_string(),
            });
        }
        Ok(())
    }

    /// Pull a named envelope field (`data`, `results`, `items`) out of
    /// the decoded body.
    pub(crate) fn envelope(operation: Operation, mut body: Value, field: &str) -> Result<Value> {
        match body.get_mut(field) {
            Some(value) => Ok(value.take()),
            None => Err(Error::MalformedResponse {
                operation,
                detail: format!("missing `{field}` field"),
            }),
        }
    }

    /// Decode `value` into the operation's declared output shape.
    pub(crate) fn project<T: DeserializeOwned>(operation: Operation, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(|e| Error::MalformedResponse {
            operation,
            detail: e.to_string(),
        })
    }
}

impl Default for JinaClient {
    fn default() -> Self {
        Self::new()
    }
}
