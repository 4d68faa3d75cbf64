use std::sync::Arc;

use crate::api::{RecipeApi, RecipeError};
use crate::recipe::{RecipeDetail, RecipeSummary};

/// Number of hits requested per search.
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// Recipe lookups with logging around the remote API.
///
/// Unlike the product catalog, errors are kept: the browser shows them.
#[derive(Clone)]
pub struct RecipeRepository {
    api: Arc<dyn RecipeApi>,
    limit: u32,
}

impl RecipeRepository {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self {
            api,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, RecipeError> {
        let query = query.trim();
        match self.api.search(query, self.limit).await {
            Ok(recipes) => {
                tracing::info!(query, count = recipes.len(), "recipe search completed");
                Ok(recipes)
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "recipe search failed");
                Err(err)
            }
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<RecipeDetail>, RecipeError> {
        self.api.summary(id).await.inspect_err(|err| {
            tracing::warn!(recipe_id = id, error = %err, "recipe summary failed");
        })
    }
}
