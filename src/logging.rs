use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies,
/// falling back to `info` when it doesn't parse.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .compact()
        .init();
}
