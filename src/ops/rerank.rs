//! Reranker API: `POST /v1/rerank` on the main host.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::Credential;
use crate::client::JinaClient;
use crate::consts::RERANK_MODEL;
use crate::error::Result;
use crate::ops::{Operation, require_list, require_str};

/// One entry of the upstream `results` array, unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    pub index: usize,
    pub relevance_score: f64,
    pub document: String,
}

impl JinaClient {
    /// Rerank `documents` by relevance to `query`. The reranker model
    /// is fixed; callers cannot pick one.
    pub async fn rerank_documents(
        &self,
        credential: &Credential,
        query: &str,
        documents: &[String],
    ) -> Result<Vec<RankedDocument>> {
        const OP: Operation = Operation::RerankDocuments;
        require_str(OP, "query", query)?;
        require_list(OP, "documents", documents)?;

        let url = format!("{}/v1/rerank", self.config().endpoints.api_base);
        let body = json!({
            "model": RERANK_MODEL,
            "query": query,
            "documents": documents,
        });
        let response = self.post_json(OP, &url, credential, Vec::new(), body).await?;
        let results = Self::envelope(OP, response, "results")?;
        Self::project(OP, results)
    }
}
