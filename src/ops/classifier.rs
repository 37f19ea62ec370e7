//! Classifier API: `POST /v1/classify` on the main host.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::Credential;
use crate::client::JinaClient;
use crate::consts::CLASSIFIER_MODEL;
use crate::error::Result;
use crate::ops::{Operation, require_list};

/// Classification of one input, from the upstream `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub index: usize,
    /// The winning label.
    pub prediction: String,
    pub score: f64,
}

impl JinaClient {
    /// Classify each entry of `input` against `labels`. The model is
    /// fixed; callers cannot pick one.
    pub async fn classify_text(
        &self,
        credential: &Credential,
        input: &[String],
        labels: &[String],
    ) -> Result<Vec<Classification>> {
        const OP: Operation = Operation::ClassifyText;
        require_list(OP, "input", input)?;
        require_list(OP, "labels", labels)?;

        let url = format!("{}/v1/classify", self.config().endpoints.api_base);
        let body = json!({
            "model": CLASSIFIER_MODEL,
            "input": input,
            "labels": labels,
        });
        let response = self.post_json(OP, &url, credential, Vec::new(), body).await?;
        let data = Self::envelope(OP, response, "data")?;
        Self::project(OP, data)
    }
}
