pub mod calculator;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod metrics;
pub mod server;
pub mod signals;
pub mod view;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `log_level`. `log_format` is either
/// `"text"` or `"json"`.
///
/// Note: This function can only be called once per process.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_format == "json" {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
