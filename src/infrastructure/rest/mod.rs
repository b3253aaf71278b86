// SPDX-License-Identifier: MPL-2.0
//! PostgREST adapter implementing the [`ContentStore`] port.
//!
//! Issues `GET {base}/rest/v1/{table}?select=*` with no filter, order or
//! range parameters; the gallery narrows the result itself.
//!
//! [`ContentStore`]: crate::application::port::ContentStore

use crate::application::port::ContentStore;
use crate::domain::content::ContentItem;
use crate::error::StoreError;
use futures_util::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use std::time::Duration;

/// User agent sent with every store request.
const USER_AGENT: &str = concat!("ReportsGallery/", env!("CARGO_PKG_VERSION"));

/// Connection details for the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestSettings {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Table holding the content rows.
    pub table: String,
    /// Anonymous API key, sent as `apikey` and bearer token.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl RestSettings {
    /// Full endpoint for the "select everything" read.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*",
            self.base_url.trim_end_matches('/'),
            self.table.trim_matches('/')
        )
    }
}

/// Store reached over HTTP.
#[derive(Debug, Clone)]
pub struct RestContentStore {
    client: reqwest::Client,
    endpoint: String,
}

impl RestContentStore {
    /// Builds the HTTP client once; it is reused by every fetch.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] if the key is not a valid header value
    /// or the TLS backend cannot be initialized.
    pub fn new(settings: &RestSettings) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = settings.api_key.as_deref() {
            let apikey = HeaderValue::from_str(key)
                .map_err(|e| StoreError::Request(format!("invalid api key: {e}")))?;
            let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| StoreError::Request(format!("invalid api key: {e}")))?;
            headers.insert("apikey", apikey);
            headers.insert(AUTHORIZATION, bearer);
        }

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ContentStore for RestContentStore {
    fn fetch_all(&self) -> BoxFuture<'static, Result<Vec<ContentItem>, StoreError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        Box::pin(async move {
            tracing::debug!(%endpoint, "fetching content records");
            let response = client.get(&endpoint).send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(StoreError::Status(status.as_u16()));
            }

            let body = response.bytes().await?;
            let items = parse_rows(&body)?;
            tracing::debug!(count = items.len(), "content records received");
            Ok::<_, StoreError>(items)
        })
    }
}

/// Decodes a row array. An empty body or JSON `null` is an empty list.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] for anything else that is not a list of
/// well-formed rows.
pub fn parse_rows(body: &[u8]) -> Result<Vec<ContentItem>, StoreError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice::<Option<Vec<ContentItem>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| StoreError::Decode(e.to_string()))
}
