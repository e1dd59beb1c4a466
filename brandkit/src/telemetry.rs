use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Log an error using the alternate selector, which emits the error chain.
pub fn log_error(e: impl Into<anyhow::Error>) {
    let e: anyhow::Error = e.into();
    tracing::error!("{e:#}");
}

/// Stderr subscriber filtered by `RUST_LOG`, or by `env_filter` when that is
/// unset or invalid.
pub fn get_subscriber(env_filter: String) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(env_filter).with(stderr)
}

/// Register a subscriber as global default and route `log` records to it.
///
/// Fails if a global subscriber is already set.
pub fn init_subscriber(
    subscriber: impl Subscriber + Sync + Send,
) -> anyhow::Result<()> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
