mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from_path(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_path(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok())?;

    Ok(config)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies `DOWNSTREAM_URL` and `DOWNSTREAM_TIMEOUT_MS` on top of the file values.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DOWNSTREAM_URL") {
        debug!("Downstream url overridden from environment: {}", url);
        config.downstream.url = url;
    }

    if let Some(raw) = lookup("DOWNSTREAM_TIMEOUT_MS") {
        config.downstream.timeout_ms = raw.trim().parse().map_err(|_| {
            Error::config(format!("Invalid DOWNSTREAM_TIMEOUT_MS value: '{}'", raw))
        })?;
    }

    Ok(())
}
