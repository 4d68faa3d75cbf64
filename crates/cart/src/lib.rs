//! Shopping cart aggregation (in-memory, per session).
//!
//! This crate contains the cart rules only: quantity tracking and the derived
//! total. No IO, no persistence, no UI types. Views observe changes through an
//! optional [`CartBus`].

pub mod cart;
pub mod event;
pub mod shared;

pub use cart::{Cart, CartLine};
pub use event::{CartBus, CartChange, CartChanged};
pub use shared::SharedCart;
