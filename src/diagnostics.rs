//! Process-wide `tracing` subscriber for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the executable. Verbosity comes from `RUST_LOG`, falling back to the filter
//! passed in. Output goes to stderr so it never mixes with command output.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

pub const DEFAULT_FILTER: &str = "warn,modesink=info";

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_diagnostics(default_filter: &str) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}
