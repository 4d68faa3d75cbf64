//! Remote catalog boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::product::Product;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("API error ({0}): {1}")]
    Status(u16, String),
    #[error("parse error: {0}")]
    Decode(String),
}

/// Source of catalog products.
///
/// The HTTP implementation lives in [`crate::http`]; tests substitute fakes.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
