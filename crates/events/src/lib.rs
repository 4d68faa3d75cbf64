//! `appshop-events`: change notifications between domain state and its
//! observers.
//!
//! Domain crates publish plain event values through [`EventBus`]; any view
//! layer subscribes without the domain knowing which one it is.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
