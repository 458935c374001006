//! Tracing subscriber setup for the binary and for tests

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when neither `RUST_LOG` nor a level is given
pub const DEFAULT_DIRECTIVE: &str = "chart_engine=info";

/// Build the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_DIRECTIVE`]
///
/// A bare level such as `debug` is scoped to this crate.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    filter_from_directive(&directive_for(level))
}

/// Directive for a `--log-level` value
fn directive_for(level: Option<&str>) -> String {
    match level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("chart_engine={}", level),
        None => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Parse `directive`, falling back to [`DEFAULT_DIRECTIVE`] when it is invalid
fn filter_from_directive(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber once; later calls are no-ops
///
/// Logs go to stderr so CSV written to stdout stays clean.
pub fn init_tracing(level: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(level);
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
