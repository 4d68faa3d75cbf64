//! Multi-writer access to a cart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use appshop_catalog::Product;
use indexmap::IndexMap;

use crate::cart::{Cart, CartLine};

/// A [`Cart`] behind one mutex, for callers with more than one writer
/// (e.g. a UI thread plus a background sync task).
///
/// Lines and total live under the same lock, so readers never see a total that
/// disagrees with the lines. A poisoned lock is recovered: every cart mutation
/// leaves the cart consistent before it can panic.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<Cart>>,
}

impl SharedCart {
    pub fn new(cart: Cart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cart)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_product(&self, product: &Product) -> i64 {
        self.lock().add_product(product)
    }

    pub fn set_quantity(&self, product: &Product, quantity: i64) {
        self.lock().set_quantity(product, quantity)
    }

    pub fn remove_product(&self, product: &Product) {
        self.lock().remove_product(product)
    }

    pub fn clear(&self) {
        self.lock().clear()
    }

    pub fn total(&self) -> i64 {
        self.lock().total()
    }

    /// Snapshot of the lines, in insertion order.
    pub fn lines(&self) -> IndexMap<Product, i64> {
        self.lock().lines().clone()
    }

    pub fn line_items(&self) -> Vec<CartLine> {
        self.lock().line_items()
    }

    /// Run `f` against the cart while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        f(&self.lock())
    }
}
