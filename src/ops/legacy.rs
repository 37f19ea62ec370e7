//! Legacy reader endpoints, kept for callers still on the old content
//! API. All three are GETs under `/reader` on the main host: no body,
//! no content-type, just the common auth headers.

use reqwest::Url;

use crate::auth::Credential;
use crate::client::JinaClient;
use crate::error::{Error, Result};
use crate::ops::{Content, Operation, require_str};

impl JinaClient {
    /// Search stored content by query.
    pub async fn fetch_content(
        &self,
        credential: &Credential,
        query: &str,
    ) -> Result<Vec<Content>> {
        const OP: Operation = Operation::FetchContent;
        require_str(OP, "query", query)?;

        let base = format!("{}/reader/search", self.config().endpoints.api_base);
        let url = Url::parse_with_params(&base, &[("query", query)])
            .map_err(|_| invalid_url(OP, "query"))?;
        let response = self.get_json(OP, url.as_str(), credential).await?;
        let items = Self::envelope(OP, response, "items")?;
        Self::project(OP, items)
    }

    /// Fetch one content item by id.
    pub async fn fetch_content_by_id(
        &self,
        credential: &Credential,
        id: &str,
    ) -> Result<Content> {
        const OP: Operation = Operation::FetchContentById;
        require_str(OP, "id", id)?;

        let url = self.content_url(OP, id, false)?;
        let response = self.get_json(OP, url.as_str(), credential).await?;
        // No envelope here: the body itself is the item.
        Self::project(OP, response)
    }

    /// Fetch content related to the item with this id.
    pub async fn fetch_related_content(
        &self,
        credential: &Credential,
        id: &str,
    ) -> Result<Vec<Content>> {
        const OP: Operation = Operation::FetchRelatedContent;
        require_str(OP, "id", id)?;

        let url = self.content_url(OP, id, true)?;
        let response = self.get_json(OP, url.as_str(), credential).await?;
        let items = Self::envelope(OP, response, "items")?;
        Self::project(OP, items)
    }

    /// `/reader/content/{id}` or `/reader/content/{id}/related`, with
    /// the id percent-encoded as a single path segment.
    fn content_url(&self, operation: Operation, id: &str, related: bool) -> Result<Url> {
        let base = format!("{}/reader/content", self.config().endpoints.api_base);
        let mut url = Url::parse(&base).map_err(|_| invalid_url(operation, "id"))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid_url(operation, "id"))?;
            segments.push(id);
            if related {
                segments.push("related");
            }
        }
        Ok(url)
    }
}

fn invalid_url(operation: Operation, parameter: &'static str) -> Error {
    Error::InvalidInput {
        operation,
        parameter,
        reason: "cannot be encoded into a request URL",
    }
}
