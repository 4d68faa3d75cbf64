use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are **immutable** facts describing a state change that already
/// happened.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "cart.line.added").
    fn event_type(&self) -> &'static str;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
