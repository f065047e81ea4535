use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("nue_models=debug,info")
        } else {
            EnvFilter::new("nue_models=info")
        }
    })
}

/// Installs a compact human-readable subscriber.
///
/// Returns `false` when a global subscriber was already set, so callers
/// (tests in particular) can invoke it more than once.
pub fn init_logger(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok()
}

/// Same as [`init_logger`] but emits one JSON object per event.
pub fn init_json_logger() -> bool {
    tracing_subscriber::registry()
        .with(default_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
        .is_ok()
}
