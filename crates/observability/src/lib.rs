//! Process-wide log setup shared by the binary and ad-hoc tools.

pub mod subscriber;

pub use subscriber::{DEFAULT_DIRECTIVE, init, init_with_default};
