//! Structured logging.
//!
//! Uses the tracing crate; the level comes from `RUST_LOG` when set,
//! otherwise from the configured default.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `default_level` applies to the proxy's own spans when `RUST_LOG` is not
/// set; tower-http request traces stay at info.
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("comick_proxy={default_level},tower_http=info").into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
