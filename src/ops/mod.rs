//! Typed operations against the Jina.ai APIs, one module per API
//! family. Each is an `impl JinaClient` block: typed parameters in,
//! one request out, the response projected into a fixed output shape.

pub mod classifier;
pub mod embeddings;
pub mod grounding;
pub mod legacy;
pub mod reader;
pub mod rerank;
pub mod search;
pub mod segmenter;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Names every client operation. Carried by every error so a failure
/// always identifies which call produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetEmbeddings,
    RerankDocuments,
    ReadContent,
    SearchWeb,
    VerifyStatement,
    SegmentText,
    ClassifyText,
    FetchContent,
    FetchContentById,
    FetchRelatedContent,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::GetEmbeddings => "GetEmbeddings",
            Operation::RerankDocuments => "RerankDocuments",
            Operation::ReadContent => "ReadContent",
            Operation::SearchWeb => "SearchWeb",
            Operation::VerifyStatement => "VerifyStatement",
            Operation::SegmentText => "SegmentText",
            Operation::ClassifyText => "ClassifyText",
            Operation::FetchContent => "FetchContent",
            Operation::FetchContentById => "FetchContentById",
            Operation::FetchRelatedContent => "FetchRelatedContent",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece of fetched content, shared by the reader and the legacy
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub title: String,
    pub content: String,
    pub url: String,
}

/// Reject a blank required string before any network call.
pub(crate) fn require_str(
    operation: Operation,
    parameter: &'static str,
    value: &str,
) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput {
            operation,
            parameter,
            reason: "must not be empty",
        });
    }
    Ok(())
}

/// Reject an empty required list before any network call.
pub(crate) fn require_list(
    operation: Operation,
    parameter: &'static str,
    values: &[String],
) -> Result<()> {
    if values.is_empty() {
        return Err(Error::InvalidInput {
            operation,
            parameter,
            reason: "must contain at least one entry",
        });
    }
    Ok(())
}
