//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the rhetor tracing/logging system.
///
/// Reads the `RHETOR_LOG` environment variable for per-subsystem log
/// levels, e.g. `RHETOR_LOG=rhetor_corpus=debug,rhetor_analysis=info`.
///
/// Falls back to `rhetor=info` if `RHETOR_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("RHETOR_LOG").unwrap_or_else(|_| EnvFilter::new("rhetor=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
