//! Diagnostic logging setup.
//!
//! Nothing is installed unless `SHIMGEN_LOG` (or `RUST_LOG`) is set, so
//! normal runs pay nothing. Output always goes to stderr; stdout carries
//! the generated stub.
//!
//! ```bash
//! SHIMGEN_LOG=debug shimgen lib.d.ts --env lib.env.json
//! SHIMGEN_LOG=shimgen_lib=trace SHIMGEN_LOG_FORMAT=json shimgen lib.d.ts --env lib.env.json
//! ```

use tracing_subscriber::EnvFilter;

/// Install the global subscriber if logging was requested.
pub fn init() {
    let filter = if let Ok(val) = std::env::var("SHIMGEN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    let json = std::env::var("SHIMGEN_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
