use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr log subscriber used by the binaries. Call once per process.
///
/// Defaults to `warn`; `RUST_LOG` overrides the filter. Logs never go to
/// stdout, which carries only program output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
