use async_trait::async_trait;
use thiserror::Error;

use crate::recipe::{RecipeDetail, RecipeSummary};

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("recipe API key is not configured")]
    MissingApiKey,
    #[error("invalid recipe API url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("API error ({0}): {1}")]
    Status(u16, String),
    #[error("parse error: {0}")]
    Decode(String),
}

/// Remote recipe search.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Free-text search returning at most `limit` hits.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<RecipeSummary>, RecipeError>;

    /// Summary for one recipe; `None` when the API answers with an empty body.
    async fn summary(&self, id: i64) -> Result<Option<RecipeDetail>, RecipeError>;
}
