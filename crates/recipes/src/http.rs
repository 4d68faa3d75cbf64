//! HTTP client for the Spoonacular API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::{RecipeApi, RecipeError};
use crate::recipe::{RecipeDetail, RecipeSummary, SearchResponse};

/// Spoonacular client. Every request carries the `apiKey` query parameter.
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl SpoonacularClient {
    pub fn new(
        client: Client,
        base_url: &str,
        api_key: Option<String>,
    ) -> Result<Self, RecipeError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| RecipeError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn request(&self, path: &str) -> Result<RequestBuilder, RecipeError> {
        let api_key = self.api_key.as_deref().ok_or(RecipeError::MissingApiKey)?;
        let url = self
            .base_url
            .join(path)
            .map_err(|e| RecipeError::InvalidUrl(e.to_string()))?;
        tracing::debug!(%url, "recipe API request");

        Ok(self.client.get(url).query(&[("apiKey", api_key)]))
    }
}

async fn send(request: RequestBuilder) -> Result<Response, RecipeError> {
    let resp = request
        .send()
        .await
        .map_err(|e| RecipeError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(RecipeError::Status(status.as_u16(), body));
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, RecipeError> {
    resp.json::<T>()
        .await
        .map_err(|e| RecipeError::Decode(e.to_string()))
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<RecipeSummary>, RecipeError> {
        let request = self
            .request("recipes/complexSearch")?
            .query(&[("query", query.to_string()), ("number", limit.to_string())]);

        let body: Option<SearchResponse> = decode(send(request).await?).await?;
        Ok(body.unwrap_or_default().results)
    }

    async fn summary(&self, id: i64) -> Result<Option<RecipeDetail>, RecipeError> {
        let request = self.request(&format!("recipes/{id}/summary"))?;
        decode(send(request).await?).await
    }
}
