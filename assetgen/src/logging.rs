//! Diagnostics go to stderr; stdout is reserved for generated code.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the global subscriber. `RUST_LOG` takes precedence over `default_level`.
pub(crate) fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("warning: tracing subscriber already initialized");
    }
}
