//! Fixed endpoints and model identifiers for the Jina.ai APIs.

/// Main API host: embeddings, rerank, classify, and the legacy reader
/// endpoints all live under it.
pub const API_BASE: &str = "https://api.jina.ai";

/// Reader API: converts a URL into LLM-friendly content.
pub const READER_URL: &str = "https://r.jina.ai/";

/// Search API: web search with LLM-friendly results.
pub const SEARCH_URL: &str = "https://s.jina.ai/";

/// Grounding API: fact-checks a statement against web sources.
pub const GROUNDING_URL: &str = "https://g.jina.ai/";

/// Segmenter API: splits text into chunks.
pub const SEGMENTER_URL: &str = "https://segment.jina.ai/";

/// Default embeddings model when the caller does not pick one.
pub const DEFAULT_EMBEDDINGS_MODEL: &str = "jina-embeddings-v3";

/// The rerank endpoint does not take a caller-supplied model.
pub const RERANK_MODEL: &str = "jina-reranker-v2-base-multilingual";

/// The classifier is pinned to the embeddings model family.
pub const CLASSIFIER_MODEL: &str = "jina-embeddings-v3";

/// All outbound traffic must stay inside this domain.
pub const ALLOWED_DOMAIN: &str = "jina.ai";

/// Environment variable consulted for the bearer token.
pub const API_KEY_ENV: &str = "JINA_API_KEY";
