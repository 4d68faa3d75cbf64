//! Recipe search backed by the Spoonacular API.
//!
//! [`RecipeRepository`] turns HTTP results into plain values; [`RecipeBrowser`]
//! keeps the list/detail screen state (data, loading flag, error message) in
//! watch channels that any view layer can observe.

pub mod api;
pub mod browser;
pub mod http;
pub mod recipe;
pub mod repository;
pub mod text;

pub use api::{RecipeApi, RecipeError};
pub use browser::{RecipeBrowser, RecipeDetailState, RecipesState};
pub use http::SpoonacularClient;
pub use recipe::{RecipeDetail, RecipeSummary};
pub use repository::RecipeRepository;
pub use text::html_to_text;
