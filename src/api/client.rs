//! `reqwest`-backed recipe API client.

use crate::api::payloads::{Envelope, ErrorBody, RecipeData, RecipeUpload, SearchData};
use crate::api::timeout::race_timeout;
use crate::api::RecipeApi;
use crate::domain::error::{ForkifyError, Result};
use crate::domain::{Recipe, RecipePreview};
use crate::Config;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::instrument;

/// HTTP client for the Forkify recipe API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ForkifyClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    timeout: Duration,
}

impl ForkifyClient {
    /// Builds a client from the API settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::Config`] if `api_url` is not a valid base URL or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut base = config.api_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| ForkifyError::Config(format!("invalid api_url {base:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ForkifyError::Config(format!("api_url {base:?} cannot be a base URL")));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("forkify/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ForkifyError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// URL of a single recipe: `<base>/<id>?key=<key>`.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::Config`] if the base URL cannot take path segments.
    pub fn recipe_url(&self, id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ForkifyError::Config("api_url cannot take path segments".to_string()))?
            .pop_if_empty()
            .push(id);
        self.append_key(&mut url);
        Ok(url)
    }

    /// URL of a search: `<base>?search=<q>&key=<key>`.
    #[must_use]
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("search", query);
        self.append_key(&mut url);
        url
    }

    /// URL of the upload endpoint: `<base>?key=<key>`.
    #[must_use]
    pub fn upload_url(&self) -> Url {
        let mut url = self.base_url.clone();
        self.append_key(&mut url);
        url
    }

    fn append_key(&self, url: &mut Url) {
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
    }

    /// Sends `request` under the timeout and decodes a success envelope.
    ///
    /// Non-2xx responses become [`ForkifyError::Fetch`] with the text
    /// `"<message> (<status>)"`, where `message` is taken from the error body.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        race_timeout(self.timeout, async move {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                let message = serde_json::from_str::<ErrorBody>(&body).map_or_else(
                    |_| status.canonical_reason().unwrap_or("Request failed").to_string(),
                    |err| err.message,
                );
                tracing::warn!(status = status.as_u16(), message = %message, "API request failed");
                return Err(ForkifyError::Fetch(format!("{message} ({})", status.as_u16())));
            }

            serde_json::from_str(&body)
                .map_err(|e| ForkifyError::Fetch(format!("invalid API response: {e}")))
        })
        .await
    }
}

impl RecipeApi for ForkifyClient {
    #[instrument(skip(self))]
    async fn fetch_recipe(&self, id: &str) -> Result<Recipe> {
        let url = self.recipe_url(id)?;
        let envelope: Envelope<RecipeData> = self.execute(self.http.get(url)).await?;
        tracing::debug!(status = ?envelope.status, "recipe fetched");
        Ok(envelope.data.recipe.into())
    }

    #[instrument(skip(self))]
    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipePreview>> {
        let url = self.search_url(query);
        let envelope: Envelope<SearchData> = self.execute(self.http.get(url)).await?;
        tracing::debug!(results = ?envelope.results, "search completed");
        Ok(envelope.data.recipes.into_iter().map(RecipePreview::from).collect())
    }

    #[instrument(skip(self, upload), fields(title = %upload.title))]
    async fn upload_recipe(&self, upload: &RecipeUpload) -> Result<Recipe> {
        let request = self.http.post(self.upload_url()).json(upload);
        let envelope: Envelope<RecipeData> = self.execute(request).await?;
        Ok(envelope.data.recipe.into())
    }
}
