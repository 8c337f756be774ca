use crate::config::{LogFormat, Settings};
use color_eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to a file using tracing.
///
/// The terminal belongs to the UI, so nothing is written to stdout or stderr.
/// RUST_LOG takes precedence over the configured level; debug mode raises the
/// default to DEBUG.
///   RUST_LOG=toolsapp::dispatch=trace  - Only trace command dispatch
pub fn init(settings: &Settings) -> Result<()> {
    let path = settings.log_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::File::create(&path)?;

    let level = if settings.debug { "debug" } else { settings.logging.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let file_subscriber = match settings.logging.format {
        LogFormat::Full => fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_writer(log_file)
            .with_target(false)
            .with_ansi(false)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(log_file)
            .with_ansi(false)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
