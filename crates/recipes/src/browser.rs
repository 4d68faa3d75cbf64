//! Observable state for the recipe list and recipe detail screens.

use tokio::sync::watch;

use crate::recipe::{RecipeDetail, RecipeSummary};
use crate::repository::RecipeRepository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipesState {
    pub recipes: Vec<RecipeSummary>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDetailState {
    pub recipe: Option<RecipeDetail>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Drives recipe searches and detail loads, publishing every state change.
///
/// A failed search keeps the previous result list and sets `error`; a new
/// request clears the error first.
pub struct RecipeBrowser {
    repository: RecipeRepository,
    list: watch::Sender<RecipesState>,
    detail: watch::Sender<RecipeDetailState>,
}

impl RecipeBrowser {
    pub fn new(repository: RecipeRepository) -> Self {
        Self {
            repository,
            list: watch::Sender::new(RecipesState::default()),
            detail: watch::Sender::new(RecipeDetailState::default()),
        }
    }

    pub fn recipes(&self) -> RecipesState {
        self.list.borrow().clone()
    }

    pub fn detail(&self) -> RecipeDetailState {
        self.detail.borrow().clone()
    }

    pub fn watch_recipes(&self) -> watch::Receiver<RecipesState> {
        self.list.subscribe()
    }

    pub fn watch_detail(&self) -> watch::Receiver<RecipeDetailState> {
        self.detail.subscribe()
    }

    pub async fn search(&self, query: &str) {
        self.list.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        let result = self.repository.search(query).await;

        self.list.send_modify(|state| {
            state.is_loading = false;
            match result {
                Ok(recipes) => state.recipes = recipes,
                Err(err) => state.error = Some(err.to_string()),
            }
        });
    }

    pub async fn load_detail(&self, id: i64) {
        self.detail.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        let result = self.repository.find_by_id(id).await;

        self.detail.send_modify(|state| {
            state.is_loading = false;
            match result {
                Ok(Some(recipe)) => state.recipe = Some(recipe),
                Ok(None) => {
                    state.recipe = None;
                    state.error = Some(format!("recipe {id} not found"));
                }
                Err(err) => state.error = Some(err.to_string()),
            }
        });
    }

    /// Reset the detail screen, e.g. when navigating back to the list.
    pub fn clear_detail(&self) {
        self.detail.send_replace(RecipeDetailState::default());
    }
}
