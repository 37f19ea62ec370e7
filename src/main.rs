use anyhow::Result;
use clap::{Parser, Subcommand};

use jina_client::auth::Credential;
use jina_client::client::JinaClient;
use jina_client::ops::reader::ReaderOptions;

#[derive(Parser)]
#[command(name = "jina", version, about = "Call the Jina.ai APIs from the command line.")]
struct Cli {
    /// Bearer token; falls back to JINA_API_KEY
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate embeddings for one or more texts
    Embed {
        /// Texts to embed
        #[arg(required = true)]
        input: Vec<String>,
        /// Model identifier (default: jina-embeddings-v3)
        #[arg(long)]
        model: Option<String>,
    },
    /// Rerank documents by relevance to a query
    Rerank {
        query: String,
        /// Documents to rerank
        #[arg(required = true)]
        documents: Vec<String>,
    },
    /// Read a URL as LLM-friendly content
    Read {
        url: String,
        #[arg(long)]
        engine: Option<String>,
        /// Fetch timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        #[arg(long)]
        target_selector: Option<String>,
        #[arg(long)]
        wait_for_selector: Option<String>,
        #[arg(long)]
        remove_selector: Option<String>,
        #[arg(long)]
        with_links_summary: bool,
        #[arg(long)]
        with_images_summary: bool,
        #[arg(long)]
        with_generated_alt: bool,
        #[arg(long)]
        no_cache: bool,
        #[arg(long)]
        with_iframe: bool,
        /// markdown, html, text, screenshot or pageshot
        #[arg(long)]
        return_format: Option<String>,
        #[arg(long)]
        token_budget: Option<u64>,
        #[arg(long)]
        retain_images: Option<String>,
        #[arg(long)]
        proxy_url: Option<String>,
    },
    /// Search the web
    Search { query: String },
    /// Verify the factual accuracy of a statement
    Verify { statement: String },
    /// Segment text into chunks
    Segment { content: String },
    /// Classify texts against a set of labels
    Classify {
        /// Texts to classify
        #[arg(long = "input", required = true)]
        input: Vec<String>,
        /// Candidate labels
        #[arg(long = "label", required = true)]
        labels: Vec<String>,
    },
    /// Legacy: search stored content by query
    Fetch { query: String },
    /// Legacy: fetch one content item by id
    FetchById { id: String },
    /// Legacy: fetch content related to an id
    FetchRelated { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let credential = match cli.api_key {
        Some(key) => Credential::new(key),
        None => Credential::from_env()?,
    };
    let client = JinaClient::new();

    let output = match cli.command {
        Command::Embed { input, model } => {
            to_json(&client.get_embeddings(&credential, &input, model.as_deref()).await?)?
        }
        Command::Rerank { query, documents } => {
            to_json(&client.rerank_documents(&credential, &query, &documents).await?)?
        }
        Command::Read {
            url,
            engine,
            timeout,
            target_selector,
            wait_for_selector,
            remove_selector,
            with_links_summary,
            with_images_summary,
            with_generated_alt,
            no_cache,
            with_iframe,
            return_format,
            token_budget,
            retain_images,
            proxy_url,
        } => {
            let options = ReaderOptions {
                engine,
                timeout,
                target_selector,
                wait_for_selector,
                remove_selector,
                with_links_summary: with_links_summary.then_some(true),
                with_images_summary: with_images_summary.then_some(true),
                with_generated_alt: with_generated_alt.then_some(true),
                no_cache: no_cache.then_some(true),
                with_iframe: with_iframe.then_some(true),
                return_format,
                token_budget,
                retain_images,
                proxy_url,
            };
            to_json(&client.read_content_with_options(&credential, &url, &options).await?)?
        }
        Command::Search { query } => to_json(&client.search_web(&credential, &query).await?)?,
        Command::Verify { statement } => {
            to_json(&client.verify_statement(&credential, &statement).await?)?
        }
        Command::Segment { content } => {
            to_json(&client.segment_text(&credential, &content).await?)?
        }
        Command::Classify { input, labels } => {
            to_json(&client.classify_text(&credential, &input, &labels).await?)?
        }
        Command::Fetch { query } => to_json(&client.fetch_content(&credential, &query).await?)?,
        Command::FetchById { id } => {
            to_json(&client.fetch_content_by_id(&credential, &id).await?)?
        }
        Command::FetchRelated { id } => {
            to_json(&client.fetch_related_content(&credential, &id).await?)?
        }
    };

    println!("{output}");
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
