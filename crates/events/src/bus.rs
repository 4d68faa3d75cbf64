//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus distributes state-change notifications to any number of observers
//! (screens, loggers, tests). It carries no storage: a subscriber that joins
//! late only sees what is published after it subscribed, and should read the
//! current state from the publisher directly.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to an event stream.
///
/// Each subscription gets its own copy of every message published after it was
/// created (broadcast semantics).
///
/// ```ignore
/// let subscription = bus.subscribe();
/// cart.add_product(product);
///
/// while let Ok(event) = subscription.try_recv() {
///     render(event);
/// }
/// ```
///
/// Subscriptions are meant to be drained by a single consumer.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every message that is already queued.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// ```text
/// Cart mutation → publish(CartChanged) → Subscription ─┬─ cart screen
///                                                      └─ badge counter
/// ```
///
/// `publish()` can fail (e.g. the bus is unusable). Publishers treat that as a
/// lost notification, never as a failed mutation.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
