//! Search API: web search with LLM-friendly results.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::Credential;
use crate::client::JinaClient;
use crate::error::Result;
use crate::ops::{Operation, require_str};

/// One web search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    pub url: String,
    pub content: String,
}

impl JinaClient {
    /// Search the web. The query goes out as the `q` body field.
    pub async fn search_web(
        &self,
        credential: &Credential,
        query: &str,
    ) -> Result<Vec<SearchResult>> {
        const OP: Operation = Operation::SearchWeb;
        require_str(OP, "query", query)?;

        let endpoint = self.config().endpoints.search.clone();
        let body = json!({ "q": query });
        let response = self
            .post_json(OP, &endpoint, credential, Vec::new(), body)
            .await?;
        let data = Self::envelope(OP, response, "data")?;
        Self::project(OP, data)
    }
}
