//! Embeddings API: `POST /v1/embeddings` on the main host.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::Credential;
use crate::client::JinaClient;
use crate::consts::DEFAULT_EMBEDDINGS_MODEL;
use crate::error::Result;
use crate::ops::{Operation, require_list};

/// One embedding vector from the upstream `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    pub embedding: Vec<f32>,
}

impl JinaClient {
    /// Generate embeddings for the given inputs.
    ///
    /// `model` defaults to `jina-embeddings-v3` when `None`; a supplied
    /// model name is forwarded verbatim.
    pub async fn get_embeddings(
        &self,
        credential: &Credential,
        input: &[String],
        model: Option<&str>,
    ) -> Result<Vec<Embedding>> {
        const OP: Operation = Operation::GetEmbeddings;
        require_list(OP, "input", input)?;

        let url = format!("{}/v1/embeddings", self.config().endpoints.api_base);
        let body = json!({
            "model": model.unwrap_or(DEFAULT_EMBEDDINGS_MODEL),
            "input": input,
        });
        let response = self.post_json(OP, &url, credential, Vec::new(), body).await?;
        let data = Self::envelope(OP, response, "data")?;
        Self::project(OP, data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::Error;
    use crate::ops::testutil::{client_silent, client_with, credential};

    fn inputs() -> Vec<String> {
        vec!["hello".to_string(), "world".to_string()]
    }

    #[tokio::test]
    async fn empty_input_fails_without_network() {
        let (client, mock) = client_silent();
        let err = client
            .get_embeddings(&credential(), &[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { parameter: "input", .. }));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn default_model_is_used_when_none() {
        let (client, mock) = client_with(json!({"data": [{"embedding": [0.1, 0.2]}]}));
        client
            .get_embeddings(&credential(), &inputs(), None)
            .await
            .unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.url, "https://api.jina.ai/v1/embeddings");
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["model"], "jina-embeddings-v3");
        assert_eq!(body["input"], json!(["hello", "world"]));
    }

    #[tokio::test]
    async fn custom_model_is_forwarded_verbatim() {
        let (client, mock) = client_with(json!({"data": []}));
        client
            .get_embeddings(&credential(), &inputs(), Some("custom-x"))
            .await
            .unwrap();
        assert_eq!(mock.requests()[0].body.as_ref().unwrap()["model"], "custom-x");
    }

    #[tokio::test]
    async fn projects_data_array() {
        let (client, _mock) = client_with(json!({
            "model": "jina-embeddings-v3",
            "data": [
                {"object": "embedding", "index": 0, "embedding": [0.5, -0.25]},
                {"object": "embedding", "index": 1, "embedding": [1.0, 2.0]},
            ],
            "usage": {"total_tokens": 4},
        }));
        let embeddings = client
            .get_embeddings(&credential(), &inputs(), None)
            .await
            .unwrap();
        assert_eq!(embeddings.len(), 2);
        assert_eq!(embeddings[0].embedding, vec![0.5, -0.25]);
    }

    #[tokio::test]
    async fn missing_data_field_is_malformed() {
        let (client, _mock) = client_with(json!({"usage": {}}));
        let err = client
            .get_embeddings(&credential(), &inputs(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }
}
