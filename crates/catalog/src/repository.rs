use std::sync::Arc;

use crate::api::ProductApi;
use crate::product::Product;

/// Read access to the remote catalog for view code.
///
/// Failures are logged and flattened to `None`: a screen either has a product
/// list to show or shows its "could not load" state.
#[derive(Clone)]
pub struct ProductRepository {
    api: Arc<dyn ProductApi>,
}

impl ProductRepository {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self { api }
    }

    pub async fn get_products(&self) -> Option<Vec<Product>> {
        match self.api.fetch_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "loaded product catalog");
                Some(products)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load product catalog");
                None
            }
        }
    }
}
