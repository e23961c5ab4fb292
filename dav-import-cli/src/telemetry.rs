use tracing::metadata::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Install the global console subscriber.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !*config.enable() {
        return Ok(());
    }
    let enable_debug_logging = *config.enable_debug_logging();
    tracing_subscriber::registry()
        .with(filter(config)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(enable_debug_logging)
                .with_line_number(enable_debug_logging)
                .with_thread_ids(enable_debug_logging)
                .with_target(enable_debug_logging),
        )
        .try_init()?;
    Ok(())
}

fn filter(config: &TelemetryConfig) -> anyhow::Result<EnvFilter> {
    let max_level: LevelFilter = config.max_level().parse()?;
    let builder = EnvFilter::builder().with_default_directive(max_level.into());
    Ok(if config.level_filter().is_empty() {
        builder.from_env_lossy()
    } else {
        builder.parse_lossy(config.level_filter())
    })
}
