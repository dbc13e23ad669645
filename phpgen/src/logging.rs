//! Diagnostic logging for the `phpgen` binary.
//!
//! Nothing is installed unless `PHPGEN_LOG` or `RUST_LOG` is set. Both take
//! the usual `EnvFilter` syntax, e.g. `PHPGEN_LOG=phpgen_printer=trace`.
//! Output goes to stderr so it never mixes with rendered code on stdout.

use tracing_subscriber::EnvFilter;

const ENV_VAR: &str = "PHPGEN_LOG";

fn build_filter() -> EnvFilter {
    match std::env::var(ENV_VAR) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber when logging was requested.
pub fn init() {
    if std::env::var_os(ENV_VAR).is_none() && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
