use serde::{Deserialize, Serialize};

use crate::text::html_to_text;

/// A search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    /// Image URL; some results come without one.
    #[serde(default)]
    pub image: String,
}

/// A recipe with its (HTML) summary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub summary: String,
}

impl RecipeDetail {
    /// The summary with markup stripped, ready for a plain text view.
    pub fn summary_text(&self) -> String {
        html_to_text(&self.summary)
    }
}

/// Body of `recipes/complexSearch`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
}
