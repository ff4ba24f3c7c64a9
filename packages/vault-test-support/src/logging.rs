//! Logging for integration test binaries.
//!
//! Each `tests/*.rs` binary installs this once through `common`'s ctor hook.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber; later calls are no-ops.
///
/// Level comes from `TEST_LOG`, else `RUST_LOG`, else `warn`. `TEST_LOG_JSON=1`
/// switches to JSON lines, matching the vault binary's default output.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let json = std::env::var("TEST_LOG_JSON").is_ok_and(|v| v == "1");

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time();

        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }

        tracing::debug!("vault test logging ready");
    });
}
