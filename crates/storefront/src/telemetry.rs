//! Tracing setup for the embedding shell.
//!
//! The state layer emits `tracing` events (hydration counts, session
//! transitions, toast fallbacks); the shell decides where they go by
//! installing a subscriber. This helper installs a sensible default:
//! stderr, filtered by `RUST_LOG`, info-level for this crate otherwise.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the default tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops. The test suite
/// relies on that.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kalartz_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}
