//! Tracing subscriber setup shared by binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `<bin_name>=<default_level>` plus
/// `tower_http=debug` is used.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={},chatzilla={},tower_http=debug",
            bin_name.replace('-', "_"),
            default_level,
            default_level
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
