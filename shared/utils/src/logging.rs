use anyhow::Result;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::LoggingConfig;

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match (config.format.as_str(), &config.file_path) {
        ("json", Some(path)) => {
            let file = log_file(path)?;
            registry.with(fmt::layer().json().with_writer(file)).init();
        }
        ("json", None) => {
            registry.with(fmt::layer().json()).init();
        }
        (_, Some(path)) => {
            let file = log_file(path)?;
            registry.with(fmt::layer().with_writer(file)).init();
        }
        (_, None) => {
            registry.with(fmt::layer()).init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
    Ok(())
}

fn log_file(path: &str) -> Result<std::fs::File> {
    Ok(std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?)
}
