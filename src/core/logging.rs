//! Logging initialization.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a tracing subscriber filtered by `RUST_LOG` (defaults to
/// `info`). Meant to be called once by executables, never by the
/// library itself.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rs_felights=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}
