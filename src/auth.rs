//! Bearer-token credentials for the Jina API.

use std::fmt;

use anyhow::{Context, Result, bail};

use crate::consts::API_KEY_ENV;

/// An opaque bearer token, passed into each call and dropped when the
/// call returns. Never persisted; `Debug` never reveals it.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from `JINA_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(API_KEY_ENV)
            .with_context(|| format!("{API_KEY_ENV} is not set"))?;
        if token.is_empty() {
            bail!("{API_KEY_ENV} is set but empty");
        }
        Ok(Self(token))
    }

    /// The `Authorization` header value for this credential.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
