//! Logging and tracing configuration
//!
//! Logs go to stderr so that stdout carries nothing but the prompt and the
//! two result lines.

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize tracing for the CLI (stderr logging)
///
/// Controlled by the `RUST_LOG` environment variable. Default level is INFO
/// for this crate, WARN for dependencies, which keeps normal runs silent;
/// `RUST_LOG=fib=debug` shows what the shell parsed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("fib=info,warn")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
