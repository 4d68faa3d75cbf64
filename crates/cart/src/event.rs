use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use appshop_catalog::Product;
use appshop_events::{Event, InMemoryEventBus};

/// What a single cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartChange {
    /// A product was added; `quantity` is the line's new quantity.
    Added { product: Product, quantity: i64 },
    /// A line's quantity was set to a new positive value.
    QuantityChanged { product: Product, quantity: i64 },
    /// A line was deleted.
    Removed { product: Product },
    /// Every line was deleted.
    Cleared,
}

/// Event: the cart changed. Carries the post-mutation summary so observers can
/// re-render badges and totals without reading the cart back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartChanged {
    pub change: CartChange,
    pub line_count: usize,
    pub item_count: i64,
    pub total: i64,
    pub occurred_at: DateTime<Utc>,
}

impl Event for CartChanged {
    fn event_type(&self) -> &'static str {
        match self.change {
            CartChange::Added { .. } => "cart.line.added",
            CartChange::QuantityChanged { .. } => "cart.line.quantity_changed",
            CartChange::Removed { .. } => "cart.line.removed",
            CartChange::Cleared => "cart.cleared",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Bus carrying cart notifications.
pub type CartBus = InMemoryEventBus<CartChanged>;
