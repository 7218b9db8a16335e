use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber: JSON lines, env-filtered.
///
/// `RUST_LOG` wins when set; otherwise `default_directives` (from
/// `BINGO_LOG_LEVEL`) applies.
pub fn init_tracing(default_directives: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
