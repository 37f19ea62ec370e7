//! Segmenter API: split text into chunks.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::Credential;
use crate::client::JinaClient;
use crate::error::Result;
use crate::ops::{Operation, require_str};

/// Segmentation result. `chunks` carries `num_chunks` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    pub num_tokens: u64,
    pub num_chunks: u64,
    pub chunks: Vec<String>,
}

impl JinaClient {
    /// Segment `content` into chunks. `return_chunks` is always sent as
    /// true; the chunk list is the point of the call.
    pub async fn segment_text(
        &self,
        credential: &Credential,
        content: &str,
    ) -> Result<Segmentation> {
        const OP: Operation = Operation::SegmentText;
        require_str(OP, "content", content)?;

        let endpoint = self.config().endpoints.segmenter.clone();
        let body = json!({
            "content": content,
            "return_chunks": true,
        });
        let response = self
            .post_json(OP, &endpoint, credential, Vec::new(), body)
            .await?;
        // The segmenter response has no envelope; the body is the result.
        Self::project(OP, response)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::Error;
    use crate::ops::testutil::{client_silent, client_with, credential};

    #[tokio::test]
    async fn blank_content_fails_without_network() {
        let (client, mock) = client_silent();
        let err = client.segment_text(&credential(), "").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput { parameter: "content", .. }));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn always_requests_chunks() {
        let (client, mock) = client_with(json!({
            "num_tokens": 7,
            "num_chunks": 2,
            "chunks": ["First sentence.", "Second sentence."],
        }));
        let segmentation = client
            .segment_text(&credential(), "First sentence. Second sentence.")
            .await
            .unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.url, "https://segment.jina.ai/");
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["return_chunks"], true);
        assert_eq!(body["content"], "First sentence. Second sentence.");

        assert_eq!(segmentation.num_tokens, 7);
        assert_eq!(segmentation.num_chunks, 2);
        assert_eq!(segmentation.chunks.len() as u64, segmentation.num_chunks);
    }

    #[tokio::test]
    async fn missing_num_chunks_is_malformed() {
        let (client, _mock) = client_with(json!({"num_tokens": 7, "chunks": []}));
        let err = client.segment_text(&credential(), "text").await.unwrap_err();
        match err {
            Error::MalformedResponse { detail, .. } => assert!(detail.contains("num_chunks")),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }
}
