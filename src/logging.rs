//! Tracing initialisation for the command line tool

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

/// Installs the global subscriber writing to stderr.
///
/// Reads the filter from `SWC_VERSIONS_LOG`, falling back to
/// `swc_versions=info`. The returned guard flushes buffered events on drop
/// and must be held until the program exits.
pub fn init_logging(json: bool) -> WorkerGuard {
    let filter = build_filter(std::env::var(LOG_ENV_VAR).ok().as_deref());
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(writer))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(writer))
            .init();
    }

    guard
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
