use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use appshop_catalog::Product;
use appshop_events::EventBus;

use crate::event::{CartBus, CartChange, CartChanged};

/// One row of the cart, as rendered by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
    /// `product.price * quantity`, in smallest currency unit.
    pub subtotal: i64,
}

/// Shopping cart aggregator for one session.
///
/// # Invariants
/// - Every line has quantity >= 1. Setting a quantity <= 0 deletes the line.
/// - `total()` equals the sum of `price * quantity` over all lines after every
///   operation returns; it is recomputed inside each mutation.
///
/// Products are keyed by full value, so two equal product values share a line.
/// Lines keep the position of their first insertion; removing one shifts the
/// rest up. The total is summed exactly and clamped to the `i64` range once.
///
/// None of the operations fail. When a bus is attached, every mutation that
/// changes state publishes a [`CartChanged`]; no-ops publish nothing.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: IndexMap<Product, i64>,
    total: i64,
    bus: Option<Arc<CartBus>>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart that publishes its changes to `bus`.
    pub fn with_bus(bus: Arc<CartBus>) -> Self {
        Self {
            bus: Some(bus),
            ..Self::default()
        }
    }

    /// Read-only view of product → quantity, in insertion order.
    pub fn lines(&self) -> &IndexMap<Product, i64> {
        &self.lines
    }

    /// Current total in smallest currency unit.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Quantity for `product`, if it has a line.
    pub fn quantity(&self, product: &Product) -> Option<i64> {
        self.lines.get(product).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.values().fold(0i64, |acc, q| acc.saturating_add(*q))
    }

    /// Lines with subtotals, in the same order as [`Cart::lines`].
    pub fn line_items(&self) -> Vec<CartLine> {
        self.lines
            .iter()
            .map(|(product, &quantity)| CartLine {
                product: product.clone(),
                quantity,
                subtotal: product.price.saturating_mul(quantity),
            })
            .collect()
    }

    /// Add one unit of `product`, creating its line if needed.
    ///
    /// Returns the line's new quantity.
    pub fn add_product(&mut self, product: &Product) -> i64 {
        let quantity = self.lines.entry(product.clone()).or_insert(0);
        *quantity = quantity.saturating_add(1);
        let quantity = *quantity;

        self.recalculate_total();
        tracing::debug!(code = %product.code, quantity, total = self.total, "cart line added");
        self.publish(CartChange::Added {
            product: product.clone(),
            quantity,
        });
        quantity
    }

    /// Set the quantity of `product`'s line.
    ///
    /// `quantity <= 0` removes the line. A positive quantity on a product with
    /// no line creates one.
    pub fn set_quantity(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            self.remove_product(product);
            return;
        }

        let previous = self.lines.insert(product.clone(), quantity);
        self.recalculate_total();

        if previous == Some(quantity) {
            return;
        }
        tracing::debug!(
            code = %product.code,
            quantity,
            total = self.total,
            "cart quantity changed"
        );
        self.publish(CartChange::QuantityChanged {
            product: product.clone(),
            quantity,
        });
    }

    /// Delete `product`'s line. Removing a product that has no line is a no-op.
    pub fn remove_product(&mut self, product: &Product) {
        let removed = self.lines.shift_remove(product).is_some();
        self.recalculate_total();

        if !removed {
            return;
        }
        tracing::debug!(code = %product.code, total = self.total, "cart line removed");
        self.publish(CartChange::Removed {
            product: product.clone(),
        });
    }

    /// Delete every line.
    pub fn clear(&mut self) {
        let had_lines = !self.lines.is_empty();
        self.lines.clear();
        self.recalculate_total();

        if had_lines {
            tracing::debug!("cart cleared");
            self.publish(CartChange::Cleared);
        }
    }

    fn recalculate_total(&mut self) {
        let exact = self.lines.iter().fold(0i128, |acc, (product, &quantity)| {
            acc.saturating_add(i128::from(product.price) * i128::from(quantity))
        });
        self.total = i64::try_from(exact).unwrap_or(if exact > 0 { i64::MAX } else { i64::MIN });
    }

    fn publish(&self, change: CartChange) {
        let Some(bus) = &self.bus else {
            return;
        };

        let event = CartChanged {
            change,
            line_count: self.line_count(),
            item_count: self.item_count(),
            total: self.total,
            occurred_at: Utc::now(),
        };
        if let Err(err) = bus.publish(event) {
            tracing::warn!(?err, "failed to publish cart change");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appshop_events::{Event, Subscription};

    fn flan() -> Product {
        Product::new("001", "Flan", 500000)
            .with_category("Flan Premium")
            .with_description("Rico flan de prueba")
    }

    fn torta() -> Product {
        Product::new("002", "Torta", 1)
            .with_category("Torta Premium")
            .with_description("Rica torta de prueba")
    }

    fn cheap_flan() -> Product {
        Product::new("001", "Flan", 5)
    }

    #[test]
    fn new_cart_is_empty_with_zero_total() {
        let cart = Cart::new();
        assert!(cart.lines().is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn adding_same_product_accumulates_quantity() {
        let mut cart = Cart::new();

        assert_eq!(cart.add_product(&flan()), 1);
        assert_eq!(cart.add_product(&flan()), 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[&flan()], 2);
        assert_eq!(cart.total(), 1_000_000);
    }

    #[test]
    fn structurally_equal_products_share_a_line() {
        let mut cart = Cart::new();
        let first_fetch = flan();
        let second_fetch = flan();

        cart.add_product(&first_fetch);
        cart.add_product(&second_fetch);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity(&first_fetch), Some(2));
    }

    #[test]
    fn multi_product_total() {
        let mut cart = Cart::new();

        cart.add_product(&flan());
        cart.add_product(&torta());

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[&flan()], 1);
        assert_eq!(cart.lines()[&torta()], 1);
        assert_eq!(cart.total(), 500_001);
    }

    #[test]
    fn removing_only_product_empties_cart() {
        let mut cart = Cart::new();
        cart.add_product(&cheap_flan());

        cart.remove_product(&cheap_flan());

        assert!(cart.lines().is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn set_quantity_updates_total() {
        let mut cart = Cart::new();
        cart.add_product(&cheap_flan());

        cart.set_quantity(&cheap_flan(), 3);

        assert_eq!(cart.lines()[&cheap_flan()], 3);
        assert_eq!(cart.total(), 15);
    }

    #[test]
    fn zero_or_negative_quantity_removes_line() {
        for quantity in [0, -1, i64::MIN] {
            let mut cart = Cart::new();
            cart.add_product(&cheap_flan());
            cart.add_product(&torta());

            cart.set_quantity(&cheap_flan(), quantity);

            assert_eq!(cart.quantity(&cheap_flan()), None);
            assert_eq!(cart.total(), 1);
        }
    }

    #[test]
    fn set_quantity_on_absent_product_creates_line() {
        let mut cart = Cart::new();

        cart.set_quantity(&cheap_flan(), 4);

        assert_eq!(cart.quantity(&cheap_flan()), Some(4));
        assert_eq!(cart.total(), 20);
    }

    #[test]
    fn decrement_below_one_on_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&torta());

        cart.set_quantity(&cheap_flan(), 0);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total(), 1);
    }

    #[test]
    fn removing_absent_product_leaves_state_unchanged() {
        let mut cart = Cart::new();
        cart.add_product(&torta());
        cart.add_product(&torta());
        let before = cart.lines().clone();

        cart.remove_product(&flan());

        assert_eq!(cart.lines(), &before);
        assert_eq!(cart.total(), 2);
    }

    #[test]
    fn clear_empties_every_line() {
        let mut cart = Cart::new();
        cart.add_product(&flan());
        cart.add_product(&torta());

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn line_items_follow_insertion_order_with_subtotals() {
        let mut cart = Cart::new();
        cart.add_product(&torta());
        cart.set_quantity(&flan(), 2);

        let items = cart.line_items();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product, torta());
        assert_eq!(items[0].subtotal, 1);
        assert_eq!(items[1].product, flan());
        assert_eq!(items[1].subtotal, 1_000_000);
    }

    fn codes(cart: &Cart) -> Vec<String> {
        cart.lines().keys().map(|p| p.code.clone()).collect()
    }

    #[test]
    fn lines_keep_insertion_order_across_growth_and_removal() {
        let products: Vec<Product> = (0..20)
            .map(|i| Product::new(format!("P{i:02}"), format!("Producto {i}"), 100))
            .collect();
        let mut cart = Cart::new();
        for product in &products {
            cart.add_product(product);
        }
        let mut expected: Vec<String> = products.iter().map(|p| p.code.clone()).collect();
        assert_eq!(codes(&cart), expected);

        cart.remove_product(&products[5]);
        cart.set_quantity(&products[12], 0);
        cart.set_quantity(&products[3], 7);
        cart.add_product(&products[5]);
        expected.retain(|code| code != "P05" && code != "P12");
        expected.push("P05".to_string());

        assert_eq!(codes(&cart), expected);
    }

    #[test]
    fn total_does_not_depend_on_insertion_order() {
        let products = [
            Product::new("A", "Grande", i64::MAX),
            Product::new("B", "Grande", i64::MAX),
            Product::new("C", "Descuento", -i64::MAX),
        ];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        for order in orders {
            let mut cart = Cart::new();
            for i in order {
                cart.add_product(&products[i]);
            }
            assert_eq!(cart.total(), i64::MAX, "insertion order {order:?}");
        }
    }

    #[test]
    fn total_clamps_to_i64_range() {
        let mut cart = Cart::new();
        cart.set_quantity(&Product::new("A", "Deuda", -i64::MAX), 3);
        assert_eq!(cart.total(), i64::MIN);

        cart.set_quantity(&Product::new("B", "Cheque", i64::MAX), 2);
        assert_eq!(cart.total(), -i64::MAX);
    }

    #[test]
    fn mutations_publish_summaries_to_subscribers() {
        let bus = Arc::new(CartBus::new());
        let subscription: Subscription<CartChanged> = bus.subscribe();
        let mut cart = Cart::with_bus(bus);

        cart.add_product(&cheap_flan());
        cart.set_quantity(&cheap_flan(), 3);
        cart.add_product(&torta());
        cart.remove_product(&torta());
        cart.clear();

        let events = subscription.drain();
        let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            vec![
                "cart.line.added",
                "cart.line.quantity_changed",
                "cart.line.added",
                "cart.line.removed",
                "cart.cleared",
            ]
        );
        assert_eq!(events[1].total, 15);
        assert_eq!(events[1].item_count, 3);
        assert_eq!(events[2].line_count, 2);
        assert_eq!(events[2].total, 16);
        assert_eq!(events[4].total, 0);
    }

    #[test]
    fn noops_publish_nothing() {
        let bus = Arc::new(CartBus::new());
        let subscription: Subscription<CartChanged> = bus.subscribe();
        let mut cart = Cart::with_bus(bus);

        cart.remove_product(&flan());
        cart.set_quantity(&flan(), -2);
        cart.clear();

        assert!(subscription.drain().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(usize),
            Set(usize, i64),
            Remove(usize),
            Clear,
        }

        fn catalog() -> Vec<Product> {
            vec![
                Product::new("A", "Alfajor", 1200),
                Product::new("B", "Brownie", 2500),
                Product::new("C", "Cheesecake", 18000),
                Product::new("D", "Donut", 0),
            ]
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => (0usize..4).prop_map(Op::Add),
                3 => (0usize..4, -5i64..50).prop_map(|(i, q)| Op::Set(i, q)),
                2 => (0usize..4).prop_map(Op::Remove),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the total never drifts from an independent recomputation.
            #[test]
            fn total_matches_lines_after_every_operation(
                ops in prop::collection::vec(op_strategy(), 0..60)
            ) {
                let products = catalog();
                let mut cart = Cart::new();

                for op in ops {
                    match op {
                        Op::Add(i) => { cart.add_product(&products[i]); }
                        Op::Set(i, q) => cart.set_quantity(&products[i], q),
                        Op::Remove(i) => cart.remove_product(&products[i]),
                        Op::Clear => cart.clear(),
                    }

                    let expected: i64 = cart
                        .lines()
                        .iter()
                        .map(|(product, quantity)| product.price * quantity)
                        .sum();
                    prop_assert_eq!(cart.total(), expected);
                    prop_assert!(cart.lines().values().all(|q| *q >= 1));
                }
            }

            /// Property: n adds of equal products yield one line of quantity n.
            #[test]
            fn repeated_adds_collapse_into_one_line(n in 1i64..200) {
                let mut cart = Cart::new();
                for _ in 0..n {
                    cart.add_product(&Product::new("X", "Éclair", 7));
                }
                prop_assert_eq!(cart.line_count(), 1);
                prop_assert_eq!(cart.quantity(&Product::new("X", "Éclair", 7)), Some(n));
                prop_assert_eq!(cart.total(), 7 * n);
            }
        }
    }
}
