use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use appshop_auth::{AuthService, PasswordHasher, UserRepository};
use appshop_cart::{Cart, CartBus, SharedCart};
use appshop_catalog::{HttpProductApi, ProductRepository};
use appshop_recipes::{RecipeBrowser, RecipeRepository, RecipesState, SpoonacularClient};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::AppConfig;

/// Everything a front end needs, wired once at startup.
pub struct AppContext {
    pub config: AppConfig,
    pub products: ProductRepository,
    pub auth: AuthService,
    pub recipes: RecipeRepository,
    pub cart_bus: Arc<CartBus>,
}

impl AppContext {
    pub async fn build(config: AppConfig) -> anyhow::Result<Self> {
        let pool = connect(&config.database_url).await?;
        let users = UserRepository::new(pool);
        users.migrate().await.context("running user migrations")?;

        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("building HTTP client")?;

        let catalog = HttpProductApi::new(http.clone(), &config.catalog_url)
            .context("catalog base url")?;
        let spoonacular =
            SpoonacularClient::new(http, &config.recipes_url, config.recipes_api_key.clone())
                .context("recipes base url")?;

        tracing::info!(
            catalog = %config.catalog_url,
            recipes = %config.recipes_url,
            "app context ready"
        );

        Ok(Self {
            products: ProductRepository::new(Arc::new(catalog)),
            auth: AuthService::new(users, PasswordHasher::new(config.bcrypt_cost)),
            recipes: RecipeRepository::new(Arc::new(spoonacular)),
            cart_bus: Arc::new(CartBus::new()),
            config,
        })
    }

    /// A fresh cart publishing to the shared cart bus.
    pub fn new_cart(&self) -> SharedCart {
        SharedCart::new(Cart::with_bus(self.cart_bus.clone()))
    }

    pub fn recipe_browser(&self) -> RecipeBrowser {
        RecipeBrowser::new(self.recipes.clone())
    }

    /// Run the configured startup search. Returns `None` without touching the
    /// recipe API when no query is configured.
    pub async fn preload_recipes(&self) -> Option<RecipesState> {
        let query = self.config.recipes_query.as_deref()?;
        let browser = self.recipe_browser();
        browser.search(query).await;
        Some(browser.recipes())
    }
}

async fn connect(url: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("invalid database url {url}"))?
        .create_if_missing(true);

    // Each in-memory connection is its own database.
    let max_connections = if url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("connecting to {url}"))
}
