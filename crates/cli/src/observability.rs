use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. Logs go to stderr so that stdout stays usable for
/// encoded output.
pub fn init(log_level: LevelFilter) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()?;
    Ok(())
}
