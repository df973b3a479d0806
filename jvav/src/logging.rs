use std::sync::OnceLock;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter. Takes precedence over the
/// configured one.
pub const LOG_ENV: &str = "JVAV_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the stderr subscriber. Later calls are no-ops.
pub fn init(configured: Option<&str>) {
    INIT.get_or_init(|| {
        SubscriberBuilder::default()
            .with_env_filter(filter(configured))
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .init();
    });
}

fn filter(configured: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }

    configured
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
