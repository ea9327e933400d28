//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name stamped on every exported span.
pub const SERVICE_NAME: &str = "DonationBoard";

/// Filter used when the configuration does not set `trace_level`.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber: an `EnvFilter` at the configured
/// `trace_level` feeding an OpenTelemetry layer that exports to
/// [`crate::infrastructure::trace_file`].
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without tracing. Only the first call installs a subscriber.
///
/// ```rust
/// use donation_board::observability::init_tracing;
/// use donation_board::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(
        crate::infrastructure::trace_file(),
        resource,
        SERVICE_NAME,
    );
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
