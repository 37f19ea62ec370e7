//! Client for the Jina.ai API family: embeddings, reranking, content
//! reading, web search, statement grounding, text segmentation and text
//! classification, plus the legacy content-fetch endpoints.
//!
//! Every operation is one HTTP round trip: typed inputs go out as a JSON
//! body (and, for the reader, optional `X-*` headers), and the upstream
//! response is projected into a fixed output shape. Nothing is retried,
//! cached, or stored between calls.
//!
//! ```no_run
//! use jina_client::auth::Credential;
//! use jina_client::client::JinaClient;
//!
//! # async fn run() -> Result<(), jina_client::error::Error> {
//! let client = JinaClient::new();
//! let credential = Credential::new("jina_...");
//! let input = vec!["Hello, world".to_string()];
//! let embeddings = client.get_embeddings(&credential, &input, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod ops;
pub mod transport;
