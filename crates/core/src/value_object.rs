//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two instances with the same values are the same thing.
//! The cart relies on this: products are value objects and are used directly
//! as line keys.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new instance with the new values.
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **Eq + Hash**: values can key a map or set
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Sku(String);
///
/// impl ValueObject for Sku {}
///
/// assert_eq!(Sku("TC001".into()), Sku("TC001".into()));
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
