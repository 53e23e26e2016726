//! logging
//!
//! Tracing subscriber initialization.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, `--debug` selects `debug` and
/// the default level is `warn`.
///
/// Always writes to stderr to keep stdout clean for `--dry-run` and `show`.
///
/// ```bash
/// # Plan decisions for one run
/// stdheader --debug update src/main.c
///
/// # Module-specific filtering
/// RUST_LOG=stdheader::engine=debug stdheader insert src/*.c
/// ```
pub fn initialize(debug: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    // A second initialization (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "stdheader=debug"
    } else {
        "warn"
    }
}
