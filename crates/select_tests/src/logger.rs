// crates/select_tests/src/logger.rs

use std::io::{self, IsTerminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr subscriber that also receives `log` records from the library crates.
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init_logger(verbose: bool) {
    let default_directives = if verbose {
        "select_tests=debug,extract_test_selection=debug"
    } else {
        "select_tests=info,extract_test_selection=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}
