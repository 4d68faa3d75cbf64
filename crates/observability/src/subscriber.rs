//! JSON log output filtered through `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    init_with_default(DEFAULT_DIRECTIVE);
}

/// Like [`init`], with a caller-chosen fallback directive
/// (e.g. `"appshop_cart=debug,info"`).
pub fn init_with_default(directive: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(fallback = directive, "log subscriber installed");
    }
}

fn filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}
