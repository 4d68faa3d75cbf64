//! HTTP client for the storefront backend.

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::api::{CatalogError, ProductApi};
use crate::product::Product;

/// Path of the product listing, relative to the API base URL.
const PRODUCTS_PATH: &str = "products";

/// `ProductApi` backed by `GET {base_url}/products`.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: Client,
    base_url: Url,
}

impl HttpProductApi {
    /// Build a client for `base_url` (e.g. `http://host/api/v1/`).
    ///
    /// The HTTP client is passed in so one connection pool can be shared across
    /// every remote collaborator.
    pub fn new(client: Client, base_url: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn products_url(&self) -> Result<Url, CatalogError> {
        self.base_url
            .join(PRODUCTS_PATH)
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))
    }
}

/// Parse a base URL, making sure relative joins append to its last segment.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, CatalogError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|e| CatalogError::InvalidUrl(format!("{raw}: {e}")))
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url()?;
        tracing::debug!(%url, "fetching product catalog");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CatalogError::Status(status.as_u16(), body));
        }

        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
