//! Reader API: turn a URL into LLM-friendly content.
//!
//! The reader takes its knobs as `X-*` request headers rather than body
//! fields. [`ReaderOptions`] holds them all as `Option`s; an unset
//! field sends no header at all, never an empty string.

use serde_json::json;

use crate::auth::Credential;
use crate::client::JinaClient;
use crate::error::Result;
use crate::ops::{Content, Operation, require_str};

/// Optional knobs for [`JinaClient::read_content_with_options`].
///
/// Boolean flags are sent as the literal `"true"` only when set to
/// true; `Some(false)` emits nothing, same as `None`. Numbers are
/// stringified; strings pass through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderOptions {
    /// Browser engine the reader should use (e.g. `browser`, `direct`).
    pub engine: Option<String>,
    /// Seconds the reader may spend fetching the page.
    pub timeout: Option<u64>,
    /// CSS selector to extract instead of the whole page.
    pub target_selector: Option<String>,
    /// CSS selector to wait for before reading.
    pub wait_for_selector: Option<String>,
    /// CSS selector to strip before reading.
    pub remove_selector: Option<String>,
    pub with_links_summary: Option<bool>,
    pub with_images_summary: Option<bool>,
    pub with_generated_alt: Option<bool>,
    pub no_cache: Option<bool>,
    pub with_iframe: Option<bool>,
    /// `markdown`, `html`, `text`, `screenshot` or `pageshot`.
    pub return_format: Option<String>,
    pub token_budget: Option<u64>,
    /// Image retention policy, e.g. `none`.
    pub retain_images: Option<String>,
    pub proxy_url: Option<String>,
}

impl ReaderOptions {
    /// Serialize the set fields into header pairs.
    pub fn header_pairs(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        push_str(&mut headers, "X-Engine", &self.engine);
        push_num(&mut headers, "X-Timeout", self.timeout);
        push_str(&mut headers, "X-Target-Selector", &self.target_selector);
        push_str(&mut headers, "X-Wait-For-Selector", &self.wait_for_selector);
        push_str(&mut headers, "X-Remove-Selector", &self.remove_selector);
        push_flag(&mut headers, "X-With-Links-Summary", self.with_links_summary);
        push_flag(&mut headers, "X-With-Images-Summary", self.with_images_summary);
        push_flag(&mut headers, "X-With-Generated-Alt", self.with_generated_alt);
        push_flag(&mut headers, "X-No-Cache", self.no_cache);
        push_flag(&mut headers, "X-With-Iframe", self.with_iframe);
        push_str(&mut headers, "X-Return-Format", &self.return_format);
        push_num(&mut headers, "X-Token-Budget", self.token_budget);
        push_str(&mut headers, "X-Retain-Images", &self.retain_images);
        push_str(&mut headers, "X-Proxy-Url", &self.proxy_url);
        headers
    }
}

fn push_str(headers: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        headers.push((name, v.clone()));
    }
}

fn push_num(headers: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<u64>) {
    if let Some(v) = value {
        headers.push((name, v.to_string()));
    }
}

fn push_flag(headers: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<bool>) {
    if value == Some(true) {
        headers.push((name, "true".to_string()));
    }
}

impl JinaClient {
    /// Read `url` with default options.
    pub async fn read_content(&self, credential: &Credential, url: &str) -> Result<Content> {
        self.read_content_with_options(credential, url, &ReaderOptions::default())
            .await
    }

    /// Read `url`, forwarding each set option as a reader header.
    pub async fn read_content_with_options(
        &self,
        credential: &Credential,
        url: &str,
        options: &ReaderOptions,
    ) -> Result<Content> {
        const OP: Operation = Operation::ReadContent;
        require_str(OP, "url", url)?;

        let endpoint = self.config().endpoints.reader.clone();
        let body = json!({ "url": url });
        let response = self
            .post_json(OP, &endpoint, credential, options.header_pairs(), body)
            .await?;
        let data = Self::envelope(OP, response, "data")?;
        Self::project(OP, data)
    }
}
