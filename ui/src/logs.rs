//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// There is no environment to read `RUST_LOG` from in the browser.
const LOG_FILTER: &str = "error,ui=debug,payloads=debug";

/// Install the console subscriber. Later calls are no-ops.
pub fn init_logging() {
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_line_number(true)
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(console)
        .try_init();
    if installed.is_ok() {
        tracing::info!(filter = LOG_FILTER, "console logging initialized");
    }
}
