//! Process-wide client configuration.
//!
//! Built once at startup and never mutated after: the client only ever
//! reads it. Tests swap in their own endpoints and allow-list to point
//! at a local mock server.

use crate::consts;

/// Base URL for each Jina service host.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Host for embeddings, rerank, classify and the legacy reader paths.
    pub api_base: String,
    pub reader: String,
    pub search: String,
    pub grounding: String,
    pub segmenter: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: consts::API_BASE.to_string(),
            reader: consts::READER_URL.to_string(),
            search: consts::SEARCH_URL.to_string(),
            grounding: consts::GROUNDING_URL.to_string(),
            segmenter: consts::SEGMENTER_URL.to_string(),
        }
    }
}

/// Read-only context handed to the client at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoints: Endpoints,
    allowed_domains: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            allowed_domains: vec![consts::ALLOWED_DOMAIN.to_string()],
        }
    }
}

impl Config {
    pub fn new(endpoints: Endpoints, allowed_domains: Vec<String>) -> Self {
        Self {
            endpoints,
            allowed_domains,
        }
    }

    /// True when `host` is an allowed domain or a subdomain of one.
    pub fn host_allowed(&self, host: &str) -> bool {
        self.allowed_domains
            .iter()
            .any(|domain| host == domain || host.ends_with(&format!(".{domain}")))
    }
}
