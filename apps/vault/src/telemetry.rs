use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// JSON logs by default; `VAULT_LOG_FORMAT=text` switches to plain lines.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let text = std::env::var("VAULT_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("text"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if text {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .json();
        registry.with(fmt_layer).init();
    }
}
