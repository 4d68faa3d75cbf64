use anyhow::Context;
use appshop_app::{AppConfig, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    appshop_observability::init();

    let config = AppConfig::from_env().context("loading configuration")?;
    let ctx = AppContext::build(config)
        .await
        .context("building app context")?;

    match ctx.products.get_products().await {
        Some(products) => tracing::info!(count = products.len(), "catalog loaded"),
        None => tracing::warn!("catalog unavailable"),
    }

    match ctx.preload_recipes().await {
        Some(state) => match state.error {
            Some(error) => tracing::warn!(%error, "recipe search failed"),
            None => tracing::info!(count = state.recipes.len(), "recipes loaded"),
        },
        None => tracing::info!("APPSHOP_RECIPES_QUERY not set; skipping recipe search"),
    }

    Ok(())
}
