//! Grounding API: fact-check a statement against web sources.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::Credential;
use crate::client::JinaClient;
use crate::error::Result;
use crate::ops::{Operation, require_str};

/// A source consulted while verifying a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub url: String,
    pub key_quote: String,
    pub is_supportive: bool,
}

/// The verdict for one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    /// Confidence in the statement's factuality, 0.0 to 1.0.
    pub factuality: f64,
    /// True when the statement is judged factual.
    pub result: bool,
    pub reason: String,
    pub references: Vec<Reference>,
}

impl JinaClient {
    /// Verify the factual accuracy of `statement`.
    pub async fn verify_statement(
        &self,
        credential: &Credential,
        statement: &str,
    ) -> Result<Verification> {
        const OP: Operation = Operation::VerifyStatement;
        require_str(OP, "statement", statement)?;

        let endpoint = self.config().endpoints.grounding.clone();
        let body = json!({ "statement": statement });
        let response = self
            .post_json(OP, &endpoint, credential, Vec::new(), body)
            .await?;
        let data = Self::envelope(OP, response, "data")?;
        Self::project(OP, data)
    }
}
