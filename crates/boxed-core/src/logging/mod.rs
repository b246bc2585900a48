use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
/// `RUST_LOG` directives are honored on top of the default.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::from_default_env().add_directive(default_directive(quiet));

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();

    // A subscriber may already be installed (e.g. by a test harness).
    if result.is_err() {
        tracing::debug!(event = "core.logging.init_skipped", reason = "already initialized");
    }
}

fn default_directive(quiet: bool) -> Directive {
    let directive = if quiet { "boxed=error" } else { "boxed=info" };
    directive.parse().unwrap_or_else(|_| LevelFilter::INFO.into())
}
